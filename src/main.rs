use std::process::ExitCode;

use serval_common::prelude::*;

fn run() -> Result<(), ArrayError> {
    // The shortest possible lifecycle: allocate, fill, peek. The buffer is
    // released when `readings` leaves scope.
    let mut readings = DynArray::with_capacity(8)?;
    readings.push(42)?;
    println!("last reading: {}", readings.last()?);

    // Build, sort and search.
    let mut primes = DynArray::from_slice(&[5, 3, 2, 13, 7])?;
    primes.sort_unstable_by(|a, b| a.cmp(b));
    println!("sorted primes: {primes:?}");
    println!("contains 13: {}", primes.contains(&13));

    let late_primes = DynArray::from_slice(&[17, 19])?;
    primes.concat(&late_primes)?;
    println!("after concat: {primes:?} (len {})", primes.len());

    let mut sum = 0;
    primes.for_each(|p| sum += p);
    println!("sum of primes: {sum}");

    // Value comparison through a caller-supplied predicate.
    let mut tags = DynArray::from_slice(&["Alpha", "beta", "ALPHA"])?;
    tags.set_comparator(|a: &&str, b: &&str| a.eq_ignore_ascii_case(b));
    println!("tags equal to 'alpha': {}", tags.count(&"alpha"));
    tags.replace_value(&"alpha", "gamma", 1)?;
    println!("after replace: {tags:?}");

    // Checked access never hands back a stale slot.
    match tags.get(17) {
        Ok(tag) => println!("tag 17: {tag}"),
        Err(err) => println!("tag 17: {err}"),
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}
