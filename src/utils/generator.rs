use rand::Rng;

use crate::models::employee::{Employee, FEMALE, MALE};

pub const DEFAULT_COUNT: usize = 1_000_000;
pub const DEFAULT_BATCH_SIZE: usize = 10_000;

/// Size of the F-surnamed male batch appended after every generation run.
pub const F_SURNAME_COUNT: usize = 100;

pub const MALE_FIRST_NAMES: [&str; 10] = [
    "James", "John", "Robert", "Michael", "William",
    "David", "Richard", "Joseph", "Thomas", "Charles",
];

pub const FEMALE_FIRST_NAMES: [&str; 10] = [
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth",
    "Barbara", "Susan", "Jessica", "Sarah", "Karen",
];

pub const LAST_NAMES: [&str; 10] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones",
    "Miller", "Davis", "Garcia", "Rodriguez", "Wilson",
];

pub const MIDDLE_INITIALS: [&str; 5] = ["A.", "B.", "C.", "D.", "E."];

pub const F_SURNAME_SUFFIXES: [&str; 5] = ["isher", "ord", "letcher", "ranklin", "erguson"];

const BIRTH_YEARS: std::ops::RangeInclusive<i32> = 1950..=2005;

fn pick<'a, R: Rng + ?Sized>(rng: &mut R, items: &[&'a str]) -> &'a str {
    items[rng.gen_range(0..items.len())]
}

/// Day is capped at 28 so every month/day pair is a real date.
pub fn random_birth_date<R: Rng + ?Sized>(rng: &mut R) -> String {
    let year = rng.gen_range(BIRTH_YEARS);
    let month: u32 = rng.gen_range(1..=12);
    let day: u32 = rng.gen_range(1..=28);
    format!("{}-{:02}-{:02}", year, month, day)
}

fn compose(last_name: &str, first_name: &str, middle_initial: &str) -> String {
    format!("{} {} {}", last_name, first_name, middle_initial)
}

pub fn random_employee<R: Rng + ?Sized>(rng: &mut R) -> Employee {
    let gender = if rng.gen_bool(0.5) { MALE } else { FEMALE };
    let first_name = if gender == MALE {
        pick(rng, &MALE_FIRST_NAMES)
    } else {
        pick(rng, &FEMALE_FIRST_NAMES)
    };
    let last_name = pick(rng, &LAST_NAMES);
    let middle_initial = pick(rng, &MIDDLE_INITIALS);

    Employee {
        full_name: compose(last_name, first_name, middle_initial),
        birth_date: random_birth_date(rng),
        gender: gender.to_string(),
    }
}

pub fn random_f_surnamed_male<R: Rng + ?Sized>(rng: &mut R) -> Employee {
    let first_name = pick(rng, &MALE_FIRST_NAMES);
    let last_name = format!("F{}", pick(rng, &F_SURNAME_SUFFIXES));
    let middle_initial = pick(rng, &MIDDLE_INITIALS);

    Employee {
        full_name: compose(&last_name, first_name, middle_initial),
        birth_date: random_birth_date(rng),
        gender: MALE.to_string(),
    }
}

pub fn f_surnamed_batch<R: Rng + ?Sized>(rng: &mut R) -> Vec<Employee> {
    (0..F_SURNAME_COUNT).map(|_| random_f_surnamed_male(rng)).collect()
}
