// checks the exact primitive calls each rule produces via the token backend,
// and that those calls read back into the same value
use std::collections::{BTreeMap, HashMap, VecDeque};
use std::fmt;

use crate::token::{self, Error, Token, TokenDeserializer};
use crate::*;

fn round_trip<T>(value: &T) -> Vec<Token>
where
    T: PartialEq + fmt::Debug + Serialize + Deserialize,
{
    let tokens = token::to_tokens(value).expect("serializing must work");
    let rev: T = token::from_tokens(&tokens).expect("deserializing must work");
    assert_eq!(*value, rev, "serialization messed up data");
    tokens
}

fn invalid_variant(found: u32, count: u32) -> Error {
    Error::InvalidDiscriminant(InvalidDiscriminant::variant(found, count))
}

crate::sum_type! {
    #[derive(Debug, PartialEq)]
    enum Abc {
        A(u8),
        B(String),
        C(Vec<i16>),
    }
}

crate::sum_type! {
    #[derive(Debug, PartialEq)]
    enum Twins {
        First(u32),
        Second(u32),
    }
}

crate::sum_type! {
    #[derive(Debug, PartialEq)]
    enum List {
        Nil(()),
        Cons(Box<(u32, List)>),
    }
}

crate::sum_type! {
    #[derive(Debug, PartialEq)]
    enum Tagged<T> {
        Plain(T),
        Labelled((String, T)),
    }
}

crate::product_type! {
    #[derive(Debug, PartialEq)]
    struct Header {
        id: u64,
        name: String,
        flags: Option<u8>,
    }
}

crate::product_type! {
    #[derive(Debug, PartialEq)]
    struct Pair<T> {
        left: T,
        right: T,
    }
}

macro_rules! primitive {
    ($fn_name:ident, $Ty:ty, $Variant:ident, $values:expr) => {
        #[test]
        fn $fn_name() {
            const VALUES: &[$Ty] = &$values;
            for &v in VALUES {
                assert_eq!(
                    round_trip(&v),
                    [Token::$Variant(v)],
                    "primitives must map to exactly one call"
                );
            }
        }
    };
}

primitive!(primitive_bool, bool, Bool, [false, true]);
primitive!(primitive_char, char, Char, ['a', '\0', 'ß', '\u{10FFFF}']);
primitive!(primitive_f32, f32, F32, [0.0, -1.5, f32::MAX, f32::MIN_POSITIVE]);
primitive!(primitive_f64, f64, F64, [0.0, -1.5, f64::MAX, f64::MIN_POSITIVE]);
primitive!(primitive_u8, u8, U8, [0, 7, u8::MAX]);
primitive!(primitive_u16, u16, U16, [0, 500, u16::MAX]);
primitive!(primitive_u32, u32, U32, [0, 500_000, u32::MAX]);
primitive!(primitive_u64, u64, U64, [0, 5_000_000_000, u64::MAX]);
primitive!(primitive_u128, u128, U128, [0, 1 << 100, u128::MAX]);
primitive!(primitive_i8, i8, I8, [0, -7, i8::MIN, i8::MAX]);
primitive!(primitive_i16, i16, I16, [0, -500, i16::MIN, i16::MAX]);
primitive!(primitive_i32, i32, I32, [0, -500_000, i32::MIN, i32::MAX]);
primitive!(primitive_i64, i64, I64, [0, -5_000_000_000, i64::MIN, i64::MAX]);
primitive!(primitive_i128, i128, I128, [0, -(1 << 100), i128::MIN, i128::MAX]);

#[test]
fn primitive_unit_and_string() {
    assert_eq!(round_trip(&()), [Token::Unit], "unit is one call");
    assert_eq!(
        round_trip(&"héllo".to_owned()),
        [Token::String("héllo".to_owned())],
        "string is one call"
    );
    assert_eq!(
        token::to_tokens("borrowed").expect("serializing must work"),
        [Token::String("borrowed".to_owned())],
        "str and String must serialize the same"
    );
}

#[test]
fn box_is_transparent() {
    assert_eq!(
        round_trip(&Box::new(87654321u32)),
        round_trip(&87654321u32),
        "box must not add anything"
    );
    assert_eq!(
        round_trip(&Box::new(Box::new(Some(5i8)))),
        [Token::U8(1), Token::I8(5)],
        "nested boxes must not add anything"
    );
    assert_eq!(
        token::to_tokens(&&mut 9u16).expect("serializing must work"),
        [Token::U16(9)],
        "references must not add anything"
    );
}

#[test]
fn option_present() {
    assert_eq!(
        round_trip(&Some(7u32)),
        [Token::U8(1), Token::U32(7)],
        "present option must write tag 1 and the value"
    );
}

#[test]
fn option_absent() {
    assert_eq!(
        round_trip(&None::<u32>),
        [Token::U8(0)],
        "absent option must only write tag 0"
    );
}

#[test]
fn option_invalid_tag() {
    for tag in 2..=u8::MAX {
        let tokens = [Token::U8(tag), Token::U32(7)];
        let mut de = TokenDeserializer::new(&tokens);
        let err = Option::<u32>::deserialize(&mut de).expect_err("tag must be rejected");
        assert_eq!(
            err,
            Error::InvalidDiscriminant(InvalidDiscriminant::option_tag(tag)),
            "wrong error for tag {tag}"
        );
        assert_eq!(de.remaining(), &tokens[1..], "value must not be read");
    }
}

#[test]
fn sequence_of_strings() {
    let value = vec!["a".to_owned(), "bb".to_owned(), "ccc".to_owned()];
    assert_eq!(
        round_trip(&value),
        [
            Token::Length(3),
            Token::String("a".to_owned()),
            Token::String("bb".to_owned()),
            Token::String("ccc".to_owned()),
        ],
        "sequence must write the length, then every element in order"
    );

    let deque = VecDeque::from(value.clone());
    assert_eq!(
        round_trip(&deque),
        round_trip(&value),
        "deque and vec must serialize the same"
    );
    assert_eq!(
        token::to_tokens(value.as_slice()).expect("serializing must work"),
        round_trip(&value),
        "slice and vec must serialize the same"
    );
}

#[test]
fn sequence_short_read() {
    let tokens = [Token::Length(3), Token::U8(1), Token::U8(2)];
    let err = token::from_tokens::<Vec<u8>>(&tokens).expect_err("too short");
    assert_eq!(err, Error::Exhausted, "backend error must pass through");
}

#[test]
fn sequence_large_length_prefix() {
    // the length is trusted, but must not cause a huge allocation up front
    let tokens = [Token::Length(usize::MAX), Token::U64(1)];
    let err = token::from_tokens::<Vec<u64>>(&tokens).expect_err("too short");
    assert_eq!(err, Error::Exhausted, "backend error must pass through");
}

#[test]
fn array_has_no_length() {
    assert!(round_trip(&[0u64; 0]).is_empty(), "empty array writes nothing");
    assert_eq!(
        round_trip(&[1u16, 2, 3]),
        [Token::U16(1), Token::U16(2), Token::U16(3)],
        "array writes its elements in order without a length"
    );

    let strings = ["x".to_owned(), "y".to_owned()];
    assert_eq!(
        round_trip(&strings),
        [Token::String("x".to_owned()), Token::String("y".to_owned())],
        "arrays of non-copy types must work"
    );
}

#[test]
fn array_arity() {
    fn check<const N: usize>() {
        let value: [u32; N] = std::array::from_fn(|i| u32::try_from(i).expect("small index"));
        let tokens = round_trip(&value);
        let expected: Vec<Token> = value.iter().map(|&v| Token::U32(v)).collect();
        assert_eq!(tokens, expected, "array of {N} must be exactly {N} elements");
    }

    check::<0>();
    check::<1>();
    check::<2>();
    check::<17>();
    check::<64>();
}

#[test]
fn map_ascending_order() {
    let expected = [
        Token::Length(2),
        Token::String("a".to_owned()),
        Token::I32(1),
        Token::String("b".to_owned()),
        Token::I32(2),
    ];

    let mut btree = BTreeMap::new();
    btree.insert("b".to_owned(), 2i32);
    btree.insert("a".to_owned(), 1i32);
    assert_eq!(round_trip(&btree), expected, "btree map must be in key order");

    let mut hash = HashMap::new();
    hash.insert("b".to_owned(), 2i32);
    hash.insert("a".to_owned(), 1i32);
    assert_eq!(round_trip(&hash), expected, "hash map must be in key order");
}

#[test]
fn map_insertion_order_irrelevant() {
    let keys: Vec<u32> = (0..200).map(|i| (i * 7919) % 1000).collect();

    let forward: HashMap<u32, String> = keys.iter().map(|&k| (k, k.to_string())).collect();
    let backward: HashMap<u32, String> = keys.iter().rev().map(|&k| (k, k.to_string())).collect();

    let forward = token::to_tokens(&forward).expect("serializing must work");
    let backward = token::to_tokens(&backward).expect("serializing must work");
    assert_eq!(forward, backward, "equal maps must serialize identically");

    let btree: BTreeMap<u32, String> = keys.iter().map(|&k| (k, k.to_string())).collect();
    assert_eq!(
        token::to_tokens(&btree).expect("serializing must work"),
        forward,
        "hash map and btree map must serialize the same"
    );
}

#[test]
fn map_duplicate_keys_last_wins() {
    let tokens = [
        Token::Length(3),
        Token::U8(1),
        Token::Bool(false),
        Token::U8(2),
        Token::Bool(false),
        Token::U8(1),
        Token::Bool(true),
    ];

    let btree: BTreeMap<u8, bool> = token::from_tokens(&tokens).expect("duplicates are tolerated");
    assert_eq!(
        btree,
        BTreeMap::from([(1, true), (2, false)]),
        "last duplicate must win"
    );

    let hash: HashMap<u8, bool> = token::from_tokens(&tokens).expect("duplicates are tolerated");
    assert_eq!(
        hash,
        HashMap::from([(1, true), (2, false)]),
        "last duplicate must win"
    );
}

#[test]
fn tuple_in_order() {
    assert_eq!(
        round_trip(&(87654321i32, 54321u16, 'x')),
        [Token::I32(87654321), Token::U16(54321), Token::Char('x')],
        "tuple must write components in order"
    );
    assert_eq!(
        round_trip(&(1u8,)),
        [Token::U8(1)],
        "1-tuple must be just its component"
    );
}

#[test]
fn product_type_matches_tuple() {
    let header = Header {
        id: 42,
        name: "steph".to_owned(),
        flags: Some(3),
    };

    assert_eq!(
        round_trip(&header),
        round_trip(&(42u64, "steph".to_owned(), Some(3u8))),
        "struct must serialize like a tuple of its fields"
    );
    assert_eq!(
        round_trip(&Pair { left: 'l', right: 'r' }),
        [Token::Char('l'), Token::Char('r')],
        "generic struct must serialize its fields in order"
    );
}

#[test]
fn sum_type_writes_index() {
    assert_eq!(
        round_trip(&Abc::B("payload".to_owned())),
        [Token::VariantIndex(1), Token::String("payload".to_owned())],
        "sum type must write index and payload"
    );
    assert_eq!(
        round_trip(&Abc::C(vec![-1, 1])),
        [
            Token::VariantIndex(2),
            Token::Length(2),
            Token::I16(-1),
            Token::I16(1),
        ],
        "sum type must write index and payload"
    );
}

#[test]
fn sum_type_selects_exact_case() {
    // A and C would fail on a string token, so success means B ran
    let tokens = [Token::VariantIndex(1), Token::String("b".to_owned())];
    let value: Abc = token::from_tokens(&tokens).expect("B must decode");
    assert_eq!(value, Abc::B("b".to_owned()), "must decode alternative B");

    // identical payloads must keep their identity
    assert_eq!(
        round_trip(&Twins::Second(5)),
        [Token::VariantIndex(1), Token::U32(5)],
        "index must follow declaration order"
    );
    round_trip(&Twins::First(5));
}

#[test]
fn sum_type_invalid_index() {
    let tokens = [Token::VariantIndex(3), Token::U8(0)];
    let mut de = TokenDeserializer::new(&tokens);
    let err = Abc::deserialize(&mut de).expect_err("index 3 must be rejected");
    assert_eq!(err, invalid_variant(3, 3), "wrong error");
    assert_eq!(de.remaining(), &tokens[1..], "payload must not be read");
}

#[test]
fn sum_type_index_range() {
    type Three = OneOf3<(), (), ()>;

    for index in 0..3 {
        let tokens = [Token::VariantIndex(index), Token::Unit];
        token::from_tokens::<Three>(&tokens).expect("index in range must decode");
    }

    for index in (3..64).chain([u32::MAX]) {
        let tokens = [Token::VariantIndex(index), Token::Unit];
        let err = token::from_tokens::<Three>(&tokens).expect_err("index out of range");
        assert_eq!(err, invalid_variant(index, 3), "wrong error for {index}");
    }
}

#[test]
fn one_of_round_trip() {
    round_trip(&OneOf2::<u8, String>::A(1));
    round_trip(&OneOf2::<u8, String>::B("b".to_owned()));
    assert_eq!(
        round_trip(&OneOf8::<(), (), (), (), (), (), (), i64>::H(-8)),
        [Token::VariantIndex(7), Token::I64(-8)],
        "last alternative must have the last index"
    );
}

#[test]
fn generic_sum_type() {
    assert_eq!(
        round_trip(&Tagged::Labelled(("n".to_owned(), 4u16))),
        [
            Token::VariantIndex(1),
            Token::String("n".to_owned()),
            Token::U16(4),
        ],
        "generic sum type must write index and payload"
    );
    round_trip(&Tagged::Plain(1u8));
}

#[test]
fn recursive_sum_type() {
    let list = List::Cons(Box::new((
        1,
        List::Cons(Box::new((2, List::Nil(())))),
    )));

    assert_eq!(
        round_trip(&list),
        [
            Token::VariantIndex(1),
            Token::U32(1),
            Token::VariantIndex(1),
            Token::U32(2),
            Token::VariantIndex(0),
            Token::Unit,
        ],
        "recursive sum type must nest"
    );
}

#[test]
fn nested_round_trip() {
    type Nested = Option<Vec<(u8, OneOf3<String, Box<Abc>, [Option<char>; 2]>)>>;

    let value: Nested = Some(vec![
        (0, OneOf3::A("first".to_owned())),
        (1, OneOf3::B(Box::new(Abc::C(vec![3, 2, 1])))),
        (2, OneOf3::C([None, Some('z')])),
    ]);

    let tokens = round_trip(&value);
    assert_eq!(tokens.first(), Some(&Token::U8(1)), "must start with the tag");
    assert_eq!(tokens.get(1), Some(&Token::Length(3)), "then the length");

    let map: BTreeMap<String, Vec<Option<Twins>>> = BTreeMap::from([
        ("x".to_owned(), vec![Some(Twins::First(1)), None]),
        ("y".to_owned(), vec![]),
    ]);
    round_trip(&map);
}

#[test]
fn dyn_serializer() {
    let mut recorder = token::TokenSerializer::new();
    let ser: &mut dyn Serializer<Error = Error> = &mut recorder;
    Some(Abc::A(9)).serialize(ser).expect("serializing must work");

    assert_eq!(
        recorder.tokens(),
        [Token::U8(1), Token::VariantIndex(0), Token::U8(9)],
        "dyn serializer must see the same calls"
    );
}

#[test]
fn independent_threads() {
    let value = vec![OneOf2::<u32, String>::A(1), OneOf2::B("two".to_owned())];
    let expected = token::to_tokens(&value).expect("serializing must work");

    std::thread::scope(|s| {
        let handles: Vec<_> = (0..4)
            .map(|_| s.spawn(|| token::to_tokens(&value).expect("serializing must work")))
            .collect();

        for handle in handles {
            let tokens = handle.join().expect("thread must not panic");
            assert_eq!(tokens, expected, "every thread must produce the same tokens");
        }
    });
}

#[test]
fn error_messages() {
    assert_eq!(
        invalid_variant(5, 3).to_string(),
        "invalid variant index 5, expected a value below 3",
        "variant message"
    );
    assert_eq!(
        InvalidDiscriminant::option_tag(9).to_string(),
        "invalid option tag 9, expected a value below 2",
        "option message"
    );

    let err = token::from_tokens::<u8>(&[Token::Bool(true)]).expect_err("mismatch");
    assert_eq!(
        err.to_string(),
        "expected U8 token, found bool true",
        "mismatch message"
    );

    let err = token::from_tokens::<u8>(&[Token::U8(1), Token::U8(2)]).expect_err("trailing");
    assert_eq!(err, Error::TrailingTokens(1), "trailing tokens must be reported");
}
