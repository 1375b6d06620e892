//! Round-trip coverage for the wire value model: the record impls below are
//! hand-expanded from the emitter's output for the same declarations, so they
//! exercise exactly the code shapes that generation produces.

#![allow(unused_parens)]

use reflectgen::runtime::{self, DecodeError, Value};
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
struct Person {
    age: i32,
    name: String,
}

impl Person {
    fn encode(&self) -> Value {
        ::reflectgen::runtime::Value::Record(::std::vec![
            (
                ::std::string::String::from("age"),
                ::reflectgen::runtime::Value::Integer(::std::primitive::i64::from(*(&self.age))),
            ),
            (
                ::std::string::String::from("name"),
                ::reflectgen::runtime::Value::Text(::std::clone::Clone::clone((&self.name))),
            ),
        ])
    }

    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let __fields = ::reflectgen::runtime::expect_record(value)?;
        ::std::result::Result::Ok(Self {
            age: {
                let __value = ::reflectgen::runtime::field(__fields, "age")?;
                ::std::convert::TryFrom::try_from(::reflectgen::runtime::expect_integer(
                    __value,
                )?)?
            },
            name: {
                let __value = ::reflectgen::runtime::field(__fields, "name")?;
                ::std::borrow::ToOwned::to_owned(::reflectgen::runtime::expect_text(__value)?)
            },
        })
    }
}

#[derive(Debug, PartialEq)]
struct Inventory {
    ok: bool,
    ratio: f32,
    tags: Vec<String>,
    counts: BTreeMap<String, i64>,
    owner: Person,
}

impl Inventory {
    fn encode(&self) -> Value {
        ::reflectgen::runtime::Value::Record(::std::vec![
            (
                ::std::string::String::from("ok"),
                ::reflectgen::runtime::Value::Bool(*(&self.ok)),
            ),
            (
                ::std::string::String::from("ratio"),
                ::reflectgen::runtime::Value::Float(::std::primitive::f64::from(*(&self.ratio))),
            ),
            (
                ::std::string::String::from("tags"),
                ::reflectgen::runtime::Value::Array(
                    (&self.tags)
                        .iter()
                        .map(|__element| {
                            ::reflectgen::runtime::Value::Text(::std::clone::Clone::clone(
                                __element,
                            ))
                        })
                        .collect(),
                ),
            ),
            (
                ::std::string::String::from("counts"),
                ::reflectgen::runtime::Value::Pairs(
                    (&self.counts)
                        .iter()
                        .map(|(__key, __item)| {
                            (
                                ::reflectgen::runtime::Value::Text(::std::clone::Clone::clone(
                                    __key,
                                )),
                                ::reflectgen::runtime::Value::Integer(
                                    ::std::primitive::i64::from(*__item),
                                ),
                            )
                        })
                        .collect(),
                ),
            ),
            (
                ::std::string::String::from("owner"),
                Person::encode((&self.owner)),
            ),
        ])
    }

    fn decode(value: &Value) -> Result<Self, DecodeError> {
        let __fields = ::reflectgen::runtime::expect_record(value)?;
        ::std::result::Result::Ok(Self {
            ok: {
                let __value = ::reflectgen::runtime::field(__fields, "ok")?;
                ::reflectgen::runtime::expect_bool(__value)?
            },
            ratio: {
                let __value = ::reflectgen::runtime::field(__fields, "ratio")?;
                ::reflectgen::runtime::FromFloat::from_float(::reflectgen::runtime::expect_float(
                    __value,
                )?)
            },
            tags: {
                let __value = ::reflectgen::runtime::field(__fields, "tags")?;
                ::reflectgen::runtime::expect_array(__value)?
                    .iter()
                    .map(|__element| {
                        ::std::result::Result::Ok(::std::borrow::ToOwned::to_owned(
                            ::reflectgen::runtime::expect_text(__element)?,
                        ))
                    })
                    .collect::<::std::result::Result<_, ::reflectgen::runtime::DecodeError>>()?
            },
            counts: {
                let __value = ::reflectgen::runtime::field(__fields, "counts")?;
                ::reflectgen::runtime::expect_pairs(__value)?
                    .iter()
                    .map(|(__key, __item)| {
                        ::std::result::Result::Ok((
                            ::std::borrow::ToOwned::to_owned(
                                ::reflectgen::runtime::expect_text(__key)?,
                            ),
                            ::std::convert::TryFrom::try_from(
                                ::reflectgen::runtime::expect_integer(__item)?,
                            )?,
                        ))
                    })
                    .collect::<::std::result::Result<_, ::reflectgen::runtime::DecodeError>>()?
            },
            owner: {
                let __value = ::reflectgen::runtime::field(__fields, "owner")?;
                Person::decode(__value)?
            },
        })
    }
}

fn sample_person() -> Person {
    Person {
        age: 34,
        name: String::from("Ada"),
    }
}

#[test]
fn primitives_and_text_round_trip() {
    let person = sample_person();
    assert_eq!(Person::decode(&person.encode()).unwrap(), person);

    let unicode = Person {
        age: -7,
        name: String::from("smørrebrød \"quoted\"\n"),
    };
    assert_eq!(Person::decode(&unicode.encode()).unwrap(), unicode);
}

#[test]
fn nested_shapes_round_trip() {
    let inventory = Inventory {
        ok: true,
        ratio: 0.25,
        tags: vec![String::from("b"), String::from("a"), String::from("a")],
        counts: BTreeMap::from([(String::from("apples"), 3), (String::from("pears"), -1)]),
        owner: sample_person(),
    };
    assert_eq!(Inventory::decode(&inventory.encode()).unwrap(), inventory);
}

#[test]
fn empty_collections_round_trip() {
    let inventory = Inventory {
        ok: false,
        ratio: -1.5,
        tags: Vec::new(),
        counts: BTreeMap::new(),
        owner: sample_person(),
    };
    assert_eq!(Inventory::decode(&inventory.encode()).unwrap(), inventory);
}

#[test]
fn sequence_encoding_preserves_order_and_length() {
    let inventory = Inventory {
        ok: true,
        ratio: 1.0,
        tags: vec![String::from("z"), String::from("a"), String::from("m")],
        counts: BTreeMap::new(),
        owner: sample_person(),
    };
    let encoded = inventory.encode();
    let fields = runtime::expect_record(&encoded).unwrap();
    let tags = runtime::expect_array(runtime::field(fields, "tags").unwrap()).unwrap();
    assert_eq!(tags.len(), 3);
    assert_eq!(tags[0], Value::Text(String::from("z")));
    assert_eq!(tags[2], Value::Text(String::from("m")));
}

#[test]
fn record_fields_are_encoded_in_declaration_order() {
    let encoded = sample_person().encode();
    let fields = runtime::expect_record(&encoded).unwrap();
    let names: Vec<&str> = fields.iter().map(|(name, _)| name.as_str()).collect();
    assert_eq!(names, ["age", "name"]);
}

#[test]
fn type_mismatch_is_a_decode_error() {
    let err = Person::decode(&Value::Bool(true)).unwrap_err();
    assert!(matches!(err, DecodeError::Mismatch { expected: "record", .. }));

    let mangled = Value::Record(vec![
        (String::from("age"), Value::Text(String::from("old"))),
        (String::from("name"), Value::Text(String::from("Ada"))),
    ]);
    let err = Person::decode(&mangled).unwrap_err();
    assert!(matches!(err, DecodeError::Mismatch { expected: "integer", .. }));
}

#[test]
fn missing_field_is_a_decode_error() {
    let partial = Value::Record(vec![(String::from("age"), Value::Integer(1))]);
    let err = Person::decode(&partial).unwrap_err();
    assert!(matches!(err, DecodeError::MissingField(name) if name == "name"));
}

#[test]
fn out_of_range_integer_is_a_decode_error() {
    let wide = Value::Record(vec![
        (String::from("age"), Value::Integer(i64::MAX)),
        (String::from("name"), Value::Text(String::from("Ada"))),
    ]);
    let err = Person::decode(&wide).unwrap_err();
    assert!(matches!(err, DecodeError::IntegerRange(_)));
}

#[test]
fn float_widths_narrow_through_from_float() {
    let half: f32 = runtime::FromFloat::from_float(0.5);
    assert_eq!(half, 0.5f32);
    let whole: f64 = runtime::FromFloat::from_float(0.5);
    assert_eq!(whole, 0.5f64);
}
