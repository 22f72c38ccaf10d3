//! Fuzz target: `BoundedList` operation sequences
//!
//! Treats the input as a stream of (opcode, operand) byte pairs and applies
//! them to a small list, asserting that length never exceeds capacity and
//! that every failure is the typed error for that operation, never a panic.
//!
//! cargo fuzz run fuzz_bounded_list

#![no_main]

use libfuzzer_sys::fuzz_target;
use sigloop::error::Error;
use sigloop::list::BoundedList;

const CAP: usize = 6;

fuzz_target!(|data: &[u8]| {
    let mut list: BoundedList<u8, CAP> = BoundedList::new();

    for op in data.chunks_exact(2) {
        let (code, arg) = (op[0], op[1]);
        let len = list.len();
        match code % 8 {
            0 => match list.push_back(arg) {
                Ok(()) => assert_eq!(list.len(), len + 1),
                Err(e) => {
                    assert_eq!(len, CAP);
                    assert_eq!(e, Error::CapacityExceeded { capacity: CAP, required: CAP + 1 });
                }
            },
            1 => {
                let evicted = list.push_off_front(arg);
                assert_eq!(evicted.is_some(), len == CAP);
                assert_eq!(list.nth(0), Ok(&arg));
            }
            2 => {
                let i = usize::from(arg) % (CAP + 2);
                assert_eq!(list.set_nth(i, arg).is_ok(), i < len);
            }
            3 => {
                let removed = list.remove(&arg);
                assert_eq!(list.len(), len - usize::from(removed.is_some()));
            }
            4 => assert_eq!(list.drop_last().is_err(), len == 0),
            5 => {
                let wider: BoundedList<u8, { CAP * 2 }> = list.concat(&list);
                assert_eq!(wider.len(), len * 2);
            }
            6 => {
                let narrow: BoundedList<u8, 3> = list.resize();
                assert_eq!(narrow.len(), len.min(3));
            }
            _ => {
                let wide = list.map(|x| u32::from(*x));
                match (wide.average(), wide.max()) {
                    (Ok(avg), Ok(max)) => assert!(avg <= *max),
                    (avg, max) => {
                        assert_eq!(avg, Err(Error::EmptyCollection));
                        assert_eq!(max, Err(Error::EmptyCollection));
                    }
                }
            }
        }
        assert!(list.len() <= CAP);
    }
});
