//! Typed field access, setters and chaining on `Object`.

#![allow(clippy::approx_constant)]

use dynjson::{parse_object, DynJsonError, Kind, List, Object, Value};
use serde_json::json;

fn fixture(value: serde_json::Value) -> Object {
    parse_object(&value.to_string()).unwrap()
}

// ---------------------------------------------------------------------------
// parse / has
// ---------------------------------------------------------------------------

#[test]
fn parse_reads_scalars() {
    let object = fixture(json!({"string": "hello", "bool": true, "int": 5}));
    assert_eq!(object.string("string"), "hello");
    assert_eq!(object.int("int"), 5);
    assert!(object.bool("bool"));
}

#[test]
fn parse_rejects_invalid_text() {
    assert!(matches!(parse_object("{\"a\": "), Err(DynJsonError::Syntax(_))));
    assert!(matches!(parse_object(""), Err(DynJsonError::Syntax(_))));
}

#[test]
fn parse_rejects_array_root() {
    let err = parse_object("[1, 2]").unwrap_err();
    assert!(matches!(
        err,
        DynJsonError::UnexpectedRoot {
            expected: Kind::Object,
            found: Kind::List
        }
    ));
}

#[test]
fn from_str_matches_parse() {
    let object: Object = r#"{"a": 1}"#.parse().unwrap();
    assert_eq!(object.int("a"), 1);
}

#[test]
fn has_distinguishes_absent_from_null() {
    let object = fixture(json!({"string": "hello", "bool": true, "int": 5, "nothing": null}));
    assert!(object.has("string"));
    assert!(object.has("bool"));
    assert!(object.has("int"));
    assert!(object.has("nothing"));
    assert!(!object.has("none"));
    assert!(!object.has(""));
}

#[test]
fn null_is_present_but_never_ok() {
    let object = fixture(json!({"nothing": null}));
    assert_eq!(object.object_ok("nothing"), None);
    assert_eq!(object.list_ok("nothing"), None);
    assert_eq!(object.string_ok("nothing"), None);
    assert_eq!(object.float64_ok("nothing"), None);
    assert_eq!(object.float32_ok("nothing"), None);
    assert_eq!(object.int_ok("nothing"), None);
    assert_eq!(object.bool_ok("nothing"), None);
    assert_eq!(object.get("nothing"), Some(Value::Null));
}

// ---------------------------------------------------------------------------
// nested containers
// ---------------------------------------------------------------------------

#[test]
fn object_ok_returns_nested_object() {
    let object = fixture(json!({"data": {"even_more_data": 5}}));
    let nested = object.object_ok("data").unwrap();
    assert_eq!(nested.int("even_more_data"), 5);
    assert_eq!(object.object("data").int("even_more_data"), 5);
}

#[test]
fn object_tiers_on_mismatch() {
    let object = fixture(json!({"data": 5}));
    assert!(object.object_ok("data").is_none());
    assert!(object.object("data").is_empty());

    let def = Object::new();
    def.set_string("from", "default");
    assert_eq!(object.object_default("data", def).string("from"), "default");
}

#[test]
fn list_ok_returns_nested_list() {
    let object = fixture(json!({"data": [0, 1, 2]}));
    let list = object.list_ok("data").unwrap();
    assert_eq!(list.len(), 3);
    for (index, item) in list.iter().enumerate() {
        assert_eq!(item.int(), index as i64);
    }
    assert_eq!(object.list("data").len(), 3);
}

#[test]
fn list_tiers_on_mismatch() {
    let object = fixture(json!({"data": {"a": 1}}));
    assert!(object.list_ok("data").is_none());
    assert!(object.list("missing").is_empty());
    assert_eq!(object.list_default("data", List::from_values([9])).get(0).unwrap().int(), 9);
}

#[test]
fn nested_mutation_is_visible_from_parent() {
    let object = fixture(json!({"outer": {"inner": 5}}));
    object.object("outer").set_number("inner", 6.0);
    assert_eq!(object.chain(["outer"]).unwrap().int("inner"), 6);

    let parent = fixture(json!({"items": [1]}));
    parent.list("items").append([2]);
    assert_eq!(parent.to_json().unwrap(), r#"{"items":[1,2]}"#);
}

#[test]
fn zero_object_is_detached() {
    let object = Object::new();
    object.object("missing").set_number("x", 1.0);
    assert!(!object.has("missing"));
}

// ---------------------------------------------------------------------------
// scalars
// ---------------------------------------------------------------------------

#[test]
fn string_tiers() {
    let object = fixture(json!({"a": "Hello", "b": "Gopher", "c": false}));
    assert_eq!(object.string_ok("a").as_deref(), Some("Hello"));
    assert_eq!(object.string_ok("b").as_deref(), Some("Gopher"));
    assert_eq!(object.string_ok("c"), None);

    assert_eq!(object.string_default("a", "default"), "Hello");
    assert_eq!(object.string_default("c", "default"), "default");
    assert_eq!(object.string_default("zzz", "default"), "default");

    assert_eq!(object.string("b"), "Gopher");
    assert_eq!(object.string("c"), "");
}

#[test]
fn float64_tiers() {
    let object = fixture(json!({"a": 1.75, "b": 1337, "c": false, "d": "1.5"}));
    assert_eq!(object.float64_ok("a"), Some(1.75));
    assert_eq!(object.float64_ok("b"), Some(1337.0));
    assert_eq!(object.float64_ok("c"), None);
    assert_eq!(object.float64_ok("d"), None);

    assert_eq!(object.float64_default("a", -1.0), 1.75);
    assert_eq!(object.float64_default("c", -1.0), -1.0);
    assert_eq!(object.float64("d"), 0.0);
}

#[test]
fn float32_tracks_float64_path() {
    let object = fixture(json!({"a": 1.75, "b": 1337, "c": false, "huge": 1e300}));
    assert_eq!(object.float32_ok("a"), Some(1.75_f32));
    assert_eq!(object.float32_ok("b"), Some(1337.0_f32));
    assert_eq!(object.float32_ok("c"), None);
    assert_eq!(object.float32_ok("huge"), Some(f32::INFINITY));

    assert_eq!(object.float32_default("a", -1.0), 1.75_f32);
    assert_eq!(object.float32_default("c", -1.0), -1.0);
    assert_eq!(object.float32("c"), 0.0);
}

#[test]
fn float64_parses_hard_literals_exactly() {
    let cases: [(&str, f64); 4] = [
        ("1.5e-300", 1.5e-300),
        ("2.2250738585072014e-308", 2.2250738585072014e-308),
        // 2^53 + 1 rounds to the even neighbour.
        ("9007199254740993", 9007199254740992.0),
        ("0.30000000000000004", 0.30000000000000004),
    ];
    for (literal, expected) in cases {
        let object = parse_object(&format!(r#"{{"n": {literal}}}"#)).unwrap();
        assert_eq!(object.float64_ok("n"), Some(expected), "literal {literal}");
        assert_eq!(object.float64("n").to_bits(), expected.to_bits(), "literal {literal}");
    }

    let list = dynjson::parse_list("[1.5e-300, 5e-324]").unwrap();
    assert_eq!(list.get(0).unwrap().float64(), 1.5e-300);
    assert_eq!(list.get(1).unwrap().float64(), 5e-324);
}

#[test]
fn int_truncates_toward_zero() {
    let object = fixture(json!({"a": 1, "b": 2, "pi": 3.14159265358979, "neg": -2.7, "c": "none"}));
    assert_eq!(object.int("a"), 1);
    assert_eq!(object.int("b"), 2);
    assert_eq!(object.float64("pi"), 3.14159265358979);
    assert_eq!(object.int("pi"), 3);
    assert_eq!(object.int("neg"), -2);

    assert_eq!(object.int_ok("c"), None);
    assert_eq!(object.int_default("c", -1), -1);
    assert_eq!(object.int_default("a", -1), 1);
    assert_eq!(object.int("c"), 0);
}

#[test]
fn bool_tiers() {
    let object = fixture(json!({"yes": true, "no": false, "num": 1}));
    assert_eq!(object.bool_ok("yes"), Some(true));
    assert_eq!(object.bool_ok("no"), Some(false));
    assert_eq!(object.bool_ok("num"), None);
    assert!(object.bool_default("num", true));
    assert!(!object.bool_default("no", true));
    assert!(!object.bool("missing"));
}

// ---------------------------------------------------------------------------
// setters
// ---------------------------------------------------------------------------

#[test]
fn set_object_shares_the_child() {
    let parent = Object::new();
    let child = Object::new();
    child.set_number("a", 5.0);
    parent.set_object("child", child.clone());
    assert_eq!(parent.object("child").int("a"), 5);

    child.set_number("a", 6.0);
    assert_eq!(parent.object("child").int("a"), 6);
}

#[test]
fn set_list_stores_the_list() {
    let object = Object::new();
    let list = List::new();
    list.append([5]);
    object.set_list("list", list);

    let stored = object.list_ok("list").unwrap();
    assert_eq!(stored.get(0).unwrap().int(), 5);
}

#[test]
fn set_scalars_overwrite() {
    let object = fixture(json!({"n": 5, "s": "Hello", "b": true}));
    object.set_number("n", 10.0);
    object.set_string("s", "World");
    object.set_bool("b", false);
    assert_eq!(object.int("n"), 10);
    assert_eq!(object.string("s"), "World");
    assert_eq!(object.bool_ok("b"), Some(false));
}

#[test]
fn generic_set_normalizes_numbers() {
    let object = Object::new();
    object.set("i", 7_u8);
    object.set("f", 0.5_f32);
    object.set("none", None::<i32>);
    assert_eq!(object.get("i"), Some(Value::Number(7.0)));
    assert_eq!(object.float64("f"), 0.5);
    assert!(object.has("none"));
    assert_eq!(object.to_json().unwrap(), r#"{"i":7,"f":0.5,"none":null}"#);
}

// ---------------------------------------------------------------------------
// chain
// ---------------------------------------------------------------------------

#[test]
fn chain_walks_nested_objects() {
    let object = fixture(json!({"a": {"b": {"c": 5}}}));
    let inner = object.chain(["a", "b"]).unwrap();
    assert_eq!(inner.int("c"), 5);
    assert_eq!(inner, object.object("a").object("b"));
}

#[test]
fn chain_stops_at_non_object_or_absent() {
    let object = fixture(json!({"a": {"b": {"c": 5}}}));
    assert!(object.chain(["a", "b", "c"]).is_none());
    assert!(object.chain(["a", "x", "b"]).is_none());
    assert!(object.chain(vec!["missing".to_string()]).is_none());
}

#[test]
fn empty_chain_is_self() {
    let object = fixture(json!({"a": 1}));
    let same = object.chain(Vec::<&str>::new()).unwrap();
    assert!(Object::ptr_eq(&same, &object));
}

// ---------------------------------------------------------------------------
// serialization
// ---------------------------------------------------------------------------

#[test]
fn to_string_renders_compact_json() {
    let object = Object::new();
    object.set_string("fname", "John");
    object.set_string("lname", "Doe");
    assert_eq!(object.to_string(), r#"{"fname":"John","lname":"Doe"}"#);

    let numbers = Object::new();
    numbers.set_number("a", 1.0);
    numbers.set_number("b", 2.0);
    numbers.set_number("pi", 3.14159265358979);
    assert_eq!(numbers.to_string(), r#"{"a":1,"b":2,"pi":3.14159265358979}"#);
}

#[test]
fn to_json_pretty_indents() {
    let outer = Object::new();
    let inner = Object::new();
    inner.set_number("inner", 5.0);
    outer.set_object("outer", inner);
    assert_eq!(outer.to_json().unwrap(), r#"{"outer":{"inner":5}}"#);
    assert_eq!(
        outer.to_json_pretty().unwrap(),
        "{\n  \"outer\": {\n    \"inner\": 5\n  }\n}"
    );
}

#[test]
fn encode_failures_surface_through_to_json() {
    let object = Object::new();
    object.set_number("bad", f64::NAN);
    assert!(matches!(object.to_json(), Err(DynJsonError::NonFiniteNumber(_))));
    assert_eq!(object.to_string(), "");

    let cyclic = Object::new();
    cyclic.set_object("me", cyclic.clone());
    assert!(matches!(cyclic.to_json(), Err(DynJsonError::Cycle)));
    assert_eq!(cyclic.to_string(), "");
    cyclic.remove("me");
}

#[cfg(feature = "preserve-order")]
#[test]
fn parsed_key_order_is_preserved() {
    let object = parse_object(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
    assert_eq!(object.keys(), vec!["z", "a", "m"]);
    assert_eq!(object.to_json().unwrap(), r#"{"z":1,"a":2,"m":3}"#);
}

#[cfg(not(feature = "preserve-order"))]
#[test]
fn parsed_keys_come_back_sorted() {
    let object = parse_object(r#"{"z": 1, "a": 2, "m": 3}"#).unwrap();
    assert_eq!(object.keys(), vec!["a", "m", "z"]);
    object.set_number("b", 4.0);
    assert_eq!(object.to_json().unwrap(), r#"{"a":2,"m":3,"z":1,"b":4}"#);
}
