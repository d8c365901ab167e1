use rand::random;
use seqfold::prelude::*;
use seqfold::{
    fold_first, fold_indexed, fold_seeded, folder, try_fold_seeded, EmptyInput, GroupedSum,
};
use std::cell::Cell;
use std::collections::HashMap;

#[test]
fn seedless_sum_of_small_array() {
    assert_eq!(fold_first(vec![0, 1, 2, 3, 4], |acc, curr| acc + curr), Ok(10));
}

#[test]
fn seeded_sum_of_small_array() {
    assert_eq!(
        fold_seeded(vec![0, 1, 2, 3, 4], 10, |acc, curr| acc + curr),
        20
    );
}

#[test]
fn seeded_sum_is_seed_plus_sum() {
    for len in (0..10).chain(100..110) {
        let values: Vec<u64> = (0..len)
            .map(|_| u64::from(random::<u32>() % 1_000))
            .collect();
        let expected = 17 + values.iter().sum::<u64>();
        assert_eq!(fold_seeded(values, 17, |acc, curr| acc + curr), expected);
    }
}

#[test]
fn seedless_fold_equals_fold_seeded_by_first_element() {
    for len in 1..20 {
        let values: Vec<i64> = (0..len)
            .map(|_| i64::from(random::<i32>() % 100))
            .collect();
        let seedless = fold_first(values.iter().copied(), |acc, curr| acc - curr);
        let seeded = fold_seeded(values[1..].iter().copied(), values[0], |acc, curr| {
            acc - curr
        });
        assert_eq!(seedless, Ok(seeded));
    }
}

#[test]
fn empty_input_without_seed_is_an_error() {
    let empty: Vec<u32> = Vec::new();
    assert_eq!(fold_first(empty, |acc, curr| acc + curr), Err(EmptyInput));
}

#[test]
fn empty_input_with_seed_returns_the_seed() {
    let empty: Vec<u32> = Vec::new();
    assert_eq!(fold_seeded(empty, 42, |acc, curr| acc + curr), 42);
}

#[test]
fn singleton_without_seed_returns_the_element_untouched() {
    let combine_calls = Cell::new(0u32);
    let result = fold_first(vec![7], |acc, curr| {
        combine_calls.set(combine_calls.get() + 1);
        acc + curr
    });
    assert_eq!(result, Ok(7));
    assert_eq!(combine_calls.get(), 0);
}

#[test]
fn combine_runs_len_times_seeded_and_len_minus_one_seedless() {
    for len in 1..30usize {
        let values: Vec<usize> = (0..len).collect();
        let combine_calls = Cell::new(0usize);
        fold_seeded(values.iter().copied(), 0, |acc, curr| {
            combine_calls.set(combine_calls.get() + 1);
            acc + curr
        });
        assert_eq!(combine_calls.get(), len);
        combine_calls.set(0);
        fold_first(values.iter().copied(), |acc, curr| {
            combine_calls.set(combine_calls.get() + 1);
            acc + curr
        })
        .unwrap();
        assert_eq!(combine_calls.get(), len - 1);
    }
}

#[test]
fn fold_is_left_associated() {
    let expression = fold_seeded(1..=3, String::from("0"), |acc, curr| {
        format!("({}-{})", acc, curr)
    });
    assert_eq!(expression, "(((0-1)-2)-3)");
    assert_eq!(fold_first(vec![100, 1, 10], |acc, curr| acc - curr), Ok(89));
}

#[test]
fn indexed_fold_sees_positions_from_zero() {
    let positions = fold_indexed(vec!['a', 'b', 'c'], Vec::new(), |mut acc, item, index| {
        acc.push((index, item));
        acc
    });
    assert_eq!(positions, vec![(0, 'a'), (1, 'b'), (2, 'c')]);
}

#[test]
fn failing_combine_stops_the_fold() {
    let combine_calls = Cell::new(0u32);
    let result: Result<u32, String> = try_fold_seeded(vec![1u32, 2, 3, 4], 0, |acc, curr| {
        combine_calls.set(combine_calls.get() + 1);
        if curr == 3 {
            Err(format!("rejected {}", curr))
        } else {
            Ok(acc + curr)
        }
    });
    assert_eq!(result, Err(String::from("rejected 3")));
    assert_eq!(combine_calls.get(), 3);
}

#[test]
fn iterator_methods_match_free_functions() {
    assert_eq!((0..5).fold_seeded(10, |acc, curr| acc + curr), 20);
    assert_eq!((0..5).fold_first(|acc, curr| acc + curr), Ok(10));
    assert_eq!(
        (0..5usize).fold_indexed(0, |acc, curr, index| acc + curr * index),
        30
    );
    let empty = std::iter::empty::<u32>();
    assert_eq!(empty.fold_first(|acc, curr| acc + curr), Err(EmptyInput));
}

#[test]
fn grouping_sums_experience_by_profession() {
    struct Record {
        profession: &'static str,
        years_experience: u64,
    }
    let records = vec![
        Record {
            profession: "Developer",
            years_experience: 5,
        },
        Record {
            profession: "Developer",
            years_experience: 7,
        },
        Record {
            profession: "Designer",
            years_experience: 1,
        },
        Record {
            profession: "Designer",
            years_experience: 3,
        },
    ];
    let by_profession = GroupedSum::new(
        |r: &Record| r.profession,
        |r: &Record| r.years_experience,
    )
    .run(records);
    let mut expected = HashMap::new();
    expected.insert("Developer", 12);
    expected.insert("Designer", 4);
    assert_eq!(by_profession, expected);
}

#[test]
fn tracing_does_not_change_the_result() {
    let sum = folder(|| 0u64, |acc: u64, curr: u64| acc + curr);
    let traced_sum = folder(|| 0u64, |acc: u64, curr: u64| acc + curr).traced("sum");
    assert_eq!(traced_sum.run(0..100), sum.run(0..100));
}

#[test]
fn map_applies_to_the_final_output_only() {
    let map_calls = Cell::new(0u32);
    let doubled_sum = folder(|| 0u64, |acc: u64, curr: u64| acc + curr).map(|total| {
        map_calls.set(map_calls.get() + 1);
        total * 2
    });
    assert_eq!(doubled_sum.run(1..=4), 20);
    assert_eq!(map_calls.get(), 1);
}
