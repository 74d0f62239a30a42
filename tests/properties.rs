//! Property tests for the buffer growth policy, mutations and search.

use iobuf::{bufwrite, ByteBuffer};
use proptest::prelude::*;

// ============================================================================
// Generators
// ============================================================================

#[derive(Debug, Clone)]
enum Op {
    Push(Vec<u8>),
    PushByte(u8),
    PushFmt(u32, String),
    RemoveFront(usize),
    RemoveBack(usize),
    SetLen(usize),
    Reverse,
    Terminate,
    Clear,
}

fn arb_bytes() -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..48)
}

fn arb_op() -> impl Strategy<Value = Op> {
    prop_oneof![
        4 => arb_bytes().prop_map(Op::Push),
        2 => any::<u8>().prop_map(Op::PushByte),
        2 => (any::<u32>(), "[a-z]{0,12}").prop_map(|(n, s)| Op::PushFmt(n, s)),
        2 => (0usize..64).prop_map(Op::RemoveFront),
        2 => (0usize..64).prop_map(Op::RemoveBack),
        2 => (0usize..96).prop_map(Op::SetLen),
        1 => Just(Op::Reverse),
        1 => Just(Op::Terminate),
        1 => Just(Op::Clear),
    ]
}

/// Applies `op` to both the buffer and a plain vector model.
fn apply(buff: &mut ByteBuffer, model: &mut Vec<u8>, op: &Op) {
    match op {
        Op::Push(bytes) => {
            buff.push_bytes(bytes).unwrap();
            model.extend_from_slice(bytes);
        },
        Op::PushByte(byte) => {
            buff.push_u8(*byte).unwrap();
            model.push(*byte);
        },
        Op::PushFmt(n, s) => {
            let text = format!("{n}:{s}");
            assert_eq!(bufwrite!(*buff, "{}:{}", n, s).unwrap(), text.len());
            model.extend_from_slice(text.as_bytes());
        },
        Op::RemoveFront(n) => {
            let removed = buff.remove_front(*n);
            assert_eq!(removed, (*n).min(model.len()));
            model.drain(..removed);
        },
        Op::RemoveBack(n) => {
            let removed = buff.remove_back(*n);
            assert_eq!(removed, (*n).min(model.len()));
            model.truncate(model.len() - removed);
        },
        Op::SetLen(n) => {
            assert_eq!(buff.set_len(*n).unwrap(), *n);
            model.resize(*n, b' ');
        },
        Op::Reverse => {
            buff.reverse();
            model.reverse();
        },
        Op::Terminate => {
            let with_nul = buff.as_bytes_with_nul().unwrap();
            assert_eq!(with_nul.last(), Some(&0));
            assert_eq!(&with_nul[..with_nul.len() - 1], model.as_slice());
        },
        Op::Clear => {
            assert_eq!(buff.clear(), model.len());
            assert_eq!(buff.capacity(), 0);
            model.clear();
        },
    }
}

fn naive_find(hay: &[u8], needle: &[u8], start: usize) -> usize {
    if needle.len() > hay.len() {
        return hay.len();
    }
    (start..=hay.len() - needle.len())
        .find(|&i| &hay[i..i + needle.len()] == needle)
        .unwrap_or(hay.len())
}

// ============================================================================
// Growth & mutation
// ============================================================================

proptest! {
    #[test]
    fn operations_match_model(unit in 1usize..40, ops in prop::collection::vec(arb_op(), 0..40)) {
        let mut buff = ByteBuffer::new(unit).unwrap();
        let mut model = Vec::new();

        for op in &ops {
            let old_capacity = buff.capacity();
            apply(&mut buff, &mut model, op);

            prop_assert!(buff.len() <= buff.capacity());
            prop_assert_eq!(buff.capacity() % unit, 0);
            if !matches!(op, Op::Clear) {
                prop_assert!(buff.capacity() >= old_capacity);
                // Growth only takes the units it needs.
                if buff.capacity() > old_capacity {
                    prop_assert!(buff.capacity() - unit <= buff.len());
                }
            }
            prop_assert_eq!(buff.as_bytes(), model.as_slice());
        }
    }

    #[test]
    fn split_appends_equal_single_append(unit in 1usize..32, x in arb_bytes(), y in arb_bytes()) {
        let mut split = ByteBuffer::new(unit).unwrap();
        split.push_bytes(&x).unwrap();
        split.push_bytes(&y).unwrap();

        let mut joined = ByteBuffer::new(unit).unwrap();
        joined.push_bytes(&[x.as_slice(), y.as_slice()].concat()).unwrap();

        prop_assert_eq!(split.as_bytes(), joined.as_bytes());
        prop_assert_eq!(split.capacity(), joined.capacity());
    }

    #[test]
    fn capacity_is_smallest_fitting_multiple(unit in 1usize..64, bytes in arb_bytes()) {
        let mut buff = ByteBuffer::new(unit).unwrap();
        buff.push_bytes(&bytes).unwrap();

        let expected = (bytes.len() + unit - 1) / unit * unit;
        prop_assert_eq!(buff.capacity(), expected);
    }

    #[test]
    fn remove_front_round_trip(bytes in arb_bytes(), n in 0usize..64) {
        let mut buff = ByteBuffer::from_bytes(8, &bytes).unwrap();
        let n = n.min(bytes.len());

        prop_assert_eq!(buff.remove_front(n), n);

        let mut restored = ByteBuffer::from_bytes(8, &bytes[..n]).unwrap();
        restored.push_bytes(buff.as_bytes()).unwrap();
        prop_assert_eq!(restored.as_bytes(), bytes.as_slice());
    }

    #[test]
    fn reverse_twice_is_identity(bytes in arb_bytes()) {
        let mut buff = ByteBuffer::from_bytes(5, &bytes).unwrap();
        buff.reverse();
        buff.reverse();
        prop_assert_eq!(buff.as_bytes(), bytes.as_slice());
    }

    #[test]
    fn set_len_is_idempotent(bytes in arb_bytes(), k in 0usize..96) {
        let mut buff = ByteBuffer::from_bytes(7, &bytes).unwrap();
        buff.set_len(k).unwrap();

        let snapshot = buff.as_bytes().to_vec();
        let capacity = buff.capacity();

        prop_assert_eq!(buff.set_len(k).unwrap(), k);
        prop_assert_eq!(buff.as_bytes(), snapshot.as_slice());
        prop_assert_eq!(buff.capacity(), capacity);
    }
}

// ============================================================================
// Predicates & search
// ============================================================================

proptest! {
    #[test]
    fn find_agrees_with_naive(
        hay in prop::collection::vec(0u8..4, 0..64),
        needle in prop::collection::vec(0u8..4, 1..6),
        start in 0usize..70,
    ) {
        let buff = ByteBuffer::from_bytes(16, &hay).unwrap();
        prop_assert_eq!(buff.find(&needle, start).unwrap(), naive_find(&hay, &needle, start));
    }

    #[test]
    fn found_offset_holds_pattern(hay in arb_bytes(), at in 0usize..48, len in 1usize..8) {
        prop_assume!(!hay.is_empty());
        let at = at % hay.len();
        let len = len.min(hay.len() - at);
        let needle = hay[at..at + len].to_vec();
        let buff = ByteBuffer::from_bytes(16, &hay).unwrap();

        let idx = buff.find(&needle, 0).unwrap();
        prop_assert!(idx <= at);
        prop_assert_eq!(&buff.as_bytes()[idx..idx + len], needle.as_slice());
    }

    #[test]
    fn prefix_and_suffix_of_own_content(bytes in arb_bytes(), cut in 0usize..48) {
        let cut = cut.min(bytes.len());
        let buff = ByteBuffer::from_bytes(4, &bytes).unwrap();

        prop_assert!(buff.starts_with(&bytes[..cut]));
        prop_assert!(buff.ends_with(&bytes[cut..]));
    }

    #[test]
    fn compare_matches_c_string_order(a in arb_bytes(), b in arb_bytes()) {
        let buff = ByteBuffer::from_bytes(4, &a).unwrap();
        let cut = |s: &[u8]| s.iter().position(|&x| x == 0).map_or(s.to_vec(), |i| s[..i].to_vec());

        prop_assert_eq!(buff.compare(&b), cut(&a).cmp(&cut(&b)));
        prop_assert_eq!(buff.equals(&b), cut(&a) == cut(&b));
    }
}
