use itertools::Itertools;
use seqfold::prelude::*;
use seqfold::{fold_first, fold_seeded, folder, EmptyInput, GroupedSum};
use tracing_subscriber::EnvFilter;

#[derive(Debug)]
struct Employee {
    profession: &'static str,
    years_experience: u64,
}

fn main() -> Result<(), EmptyInput> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .init();

    let numbers = vec![0u64, 1, 2, 3, 4];
    println!(
        "seedless sum: {}",
        fold_first(numbers.iter().copied(), |acc, curr| acc + curr)?
    );
    println!(
        "sum seeded with 10: {}",
        fold_seeded(numbers.iter().copied(), 10, |acc, curr| acc + curr)
    );

    // same sum again, one trace line per step
    let traced_sum = folder(|| 0u64, |acc: u64, curr: u64| acc + curr).traced("sum");
    println!("traced sum: {}", traced_sum.run(numbers.iter().copied()));

    let employees = vec![
        Employee {
            profession: "Developer",
            years_experience: 5,
        },
        Employee {
            profession: "Developer",
            years_experience: 7,
        },
        Employee {
            profession: "Designer",
            years_experience: 1,
        },
        Employee {
            profession: "Designer",
            years_experience: 3,
        },
    ];
    let by_profession = GroupedSum::new(
        |e: &Employee| e.profession,
        |e: &Employee| e.years_experience,
    )
    .traced("experience")
    .run(employees);
    for (profession, years) in by_profession.into_iter().sorted() {
        println!("{}: {} years", profession, years);
    }
    Ok(())
}
