use linked_list::{LinkedList, ListError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::mem;

#[test]
fn end_to_end_build_move_shrink() {
    let mut list = LinkedList::new();
    list.push_back(1);
    list.push_back(3);
    list.insert(1, 2).unwrap();
    assert_eq!(format!("{list:?}"), "[1, 2, 3]");
    list.push_front(0);
    assert_eq!(format!("{list:?}"), "[0, 1, 2, 3]");

    let mut moved = mem::take(&mut list);
    assert!(list.is_empty());
    assert_eq!(list.len(), 0);

    assert_eq!(moved.erase(2), Ok(2));
    assert_eq!(format!("{moved:?}"), "[0, 1, 3]");
    assert_eq!(moved.pop_back(), Ok(3));
    assert_eq!(format!("{moved:?}"), "[0, 1]");
    assert_eq!(moved.len(), 2);
}

#[test]
fn rewrite_through_cursor_and_indexing() {
    let mut words: LinkedList<String> = LinkedList::new();
    for _ in 0..10 {
        words.push_back(String::from("n"));
    }
    let width = words.len();
    for word in words.iter_mut() {
        *word = "b".repeat(width);
    }
    assert!(words.iter().all(|word| word == "bbbbbbbbbb"));

    for i in 0..words.len() {
        words[i] = format!("c{i}");
    }
    let seen: Vec<String> = words.into_iter().collect();
    assert_eq!(seen.len(), 10);
    assert_eq!(seen[0], "c0");
    assert_eq!(seen[9], "c9");
}

#[test]
fn random_operations_match_a_vec_oracle() {
    let mut rng = StdRng::seed_from_u64(0x5EED);
    let mut list: LinkedList<i64> = LinkedList::new();
    let mut oracle: Vec<i64> = Vec::new();

    for step in 0usize..10_000 {
        let value: i64 = rng.gen_range(-50..50);
        match rng.gen_range(0..12) {
            0 | 1 => {
                list.push_front(value);
                oracle.insert(0, value);
            }
            2 | 3 => {
                list.push_back(value);
                oracle.push(value);
            }
            4 => {
                let index = rng.gen_range(0..=oracle.len());
                list.insert(index, value).unwrap();
                oracle.insert(index, value);
            }
            5 => {
                // Past-the-end insert is rejected without mutating.
                let index = oracle.len() + rng.gen_range(1..4);
                assert_eq!(
                    list.insert(index, value),
                    Err(ListError::OutOfRange {
                        index,
                        len: oracle.len()
                    })
                );
            }
            6 => {
                if oracle.is_empty() {
                    assert_eq!(list.pop_front(), Err(ListError::Empty));
                } else {
                    assert_eq!(list.pop_front(), Ok(oracle.remove(0)));
                }
            }
            7 => {
                if oracle.is_empty() {
                    assert_eq!(list.pop_back(), Err(ListError::Empty));
                } else {
                    assert_eq!(list.pop_back(), Ok(oracle.pop().unwrap()));
                }
            }
            8 => {
                if oracle.is_empty() {
                    assert_eq!(
                        list.erase(0),
                        Err(ListError::OutOfRange { index: 0, len: 0 })
                    );
                } else {
                    let index = rng.gen_range(0..oracle.len());
                    assert_eq!(list.erase(index), Ok(oracle.remove(index)));
                }
            }
            9 => {
                if oracle.is_empty() {
                    assert_eq!(list.front(), Err(ListError::Empty));
                    assert_eq!(list.back(), Err(ListError::Empty));
                } else {
                    assert_eq!(list.front(), Ok(oracle.first().unwrap()));
                    assert_eq!(list.back(), Ok(oracle.last().unwrap()));
                    let index = rng.gen_range(0..oracle.len());
                    assert_eq!(list.get(index), Ok(&oracle[index]));
                }
                assert_eq!(
                    list.find_index(&value),
                    oracle.iter().position(|&v| v == value)
                );
            }
            10 => {
                let copy = list.clone();
                assert!(copy.iter().eq(oracle.iter()));
                assert_eq!(copy.len(), oracle.len());
            }
            _ => {
                // Rare full reset keeps runs from growing without bound.
                if rng.gen_range(0..8) == 0 {
                    list.clear();
                    oracle.clear();
                }
            }
        }

        assert_eq!(list.len(), oracle.len(), "length diverged at step {step}");
        if step % 512 == 0 {
            assert!(
                list.iter().eq(oracle.iter()),
                "contents diverged at step {step}"
            );
        }
    }

    assert!(list.iter().eq(oracle.iter()), "final contents diverged");
}
