// Example: positional and named quantities
//
// Quantities can be given positionally (water, sugar, lemon juice, fruit
// puree, in that order), by name, or mixed. Named values are merged after
// positional ones and win for the same resource.

use bevopt::{optimize, ResourceArgs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    // One positional value, three named.
    let mixed = optimize(
        ResourceArgs::positional([100.0])
            .with_sugar(50.0)
            .with_fruit_puree(40.0)
            .with_lemon_juice(30.0),
    )?;
    println!("One positional + three named: {}", mixed);

    // The named water quantity overrides the positional 100.
    let throttled = optimize(
        ResourceArgs::positional([100.0, 50.0, 30.0, 40.0]).with_water(10.0),
    )?;
    println!("Water overridden down to 10: {}", throttled);

    // Supplying only two of the four resources fails before any solve.
    match optimize(ResourceArgs::positional([100.0, 50.0])) {
        Ok(total) => println!("Unexpected success: {}", total),
        Err(err) => println!("Incomplete input rejected: {}", err),
    }

    Ok(())
}
