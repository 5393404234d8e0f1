//! Integration tests for concurrent access
//!
//! Racing first lookups of the same value must still converge on a single
//! canonical instance.

use smart_enums_core::{Enum, EnumFactory, EnumValue, KindHandle, engine, smart_enum};
use std::thread;

smart_enum! {
    pub struct Contended {
        north = "north" => "North",
        south = "south" => "South",
        east = "east" => "East",
        west = "west" => "West",
    }
}

smart_enum! {
    pub struct Fresh {
        first = "first" => "First",
        second = "second" => "Second",
    }
}

const THREADS: usize = 16;

#[test]
fn racing_first_lookups_share_one_instance() {
    let seen: Vec<Enum<Contended>> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|_| s.spawn(|| Enum::<Contended>::from_value("north").unwrap()))
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let canonical = Contended::north();
    assert_eq!(seen.len(), THREADS);
    for instance in seen {
        assert!(instance.ptr_eq(canonical));
    }
}

#[test]
fn mixed_entry_points_converge() {
    let seen: Vec<Vec<EnumValue>> = thread::scope(|s| {
        let handles: Vec<_> = (0..THREADS)
            .map(|i| {
                s.spawn(move || match i % 3 {
                    0 => Enum::<Contended>::all().into_iter().map(EnumValue::from).collect(),
                    1 => EnumFactory::of::<Contended>().unwrap().all(),
                    _ => Enum::<Contended>::from_values(["north", "south", "east", "west"])
                        .unwrap()
                        .into_iter()
                        .map(EnumValue::from)
                        .collect(),
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });

    let expected: Vec<EnumValue> = Enum::<Contended>::all()
        .into_iter()
        .map(EnumValue::from)
        .collect();
    for batch in seen {
        assert_eq!(batch.len(), expected.len());
        for (a, b) in batch.iter().zip(&expected) {
            assert!(a.ptr_eq(*b));
        }
    }
}

#[test]
fn cache_holds_one_entry_per_value() {
    thread::scope(|s| {
        for _ in 0..THREADS {
            s.spawn(|| {
                for raw in ["first", "second", "first"] {
                    Enum::<Fresh>::from_value(raw).unwrap();
                }
            });
        }
    });

    assert_eq!(engine::cached_count(KindHandle::of::<Fresh>()), 2);
}
