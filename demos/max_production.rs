// Example: maximum production from a stocked pantry
//
// A juice bar has 100 l of water, 50 kg of sugar, 30 l of lemon juice and
// 40 kg of fruit puree. One lemonade takes 2 water + 1 sugar + 1 lemon
// juice; one juice takes 1 water + 2 fruit puree.
//
// Question: how many drinks can it mix in total?

use bevopt::{optimize, ResourceArgs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let total = optimize(ResourceArgs::positional([100.0, 50.0, 30.0, 40.0]))?;
    println!("Maximum number of drinks: {}", total);

    let nothing = optimize(ResourceArgs::positional([0.0, 0.0, 0.0, 0.0]))?;
    println!("From an empty pantry: {}", nothing);

    Ok(())
}
