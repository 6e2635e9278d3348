// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_bigint::prelude::*;

fn main() {
    println!("=== Decimal Big Integer Example ===\n");

    let x: BigInt = "100_200_100".parse().unwrap();
    let y: BigInt = "300_200_100".parse().unwrap();

    println!("x = {}", x);
    println!("y = {}\n", y);

    println!("x + y = {}", &x + &y);
    println!("x - y = {}", &x - &y);
    println!("x * y = {}", &x * &y);

    // Magnitudes are unbounded; keep squaring past every native width
    println!("\n=== Growth ===");
    let mut value = y;
    for round in 1..=4 {
        let square = value.clone();
        value *= square;
        println!("y^{} has {} digits", 1 << round, value.digit_count());
    }
}
