use option_rail::{chain, get_value, ChainExt};

#[derive(Debug)]
struct Engine {
    horsepower: u32,
}

#[derive(Debug)]
struct Car {
    brand: String,
    engine: Option<Engine>,
}

fn main() {
    println!("Running Quick Start examples...");

    let car = Car {
        brand: "koenigsegg".to_string(),
        engine: Some(Engine { horsepower: 1600 }),
    };
    let wreck = Car {
        brand: "lada".to_string(),
        engine: None,
    };

    // 1. Basic chain: traverse first, decide at the end
    println!("\n1. Basic chain:");
    let hp = chain(&car)
        .try_attr(|c| c.engine.as_ref())
        .attr(|e| &e.horsepower);
    println!("{} horsepower: {:?}", car.brand, get_value(hp, None));

    // 2. Absent path: no panic, no error, just an absent proxy
    println!("\n2. Absent path:");
    let hp = chain(&wreck)
        .try_attr(|c| c.engine.as_ref())
        .attr(|e| &e.horsepower);
    println!("{} resolved: {}", wreck.brand, hp.is_present());
    println!("{} horsepower with fallback: {}", wreck.brand, hp.get_or(&0));

    // 3. Extension trait entry point
    println!("\n3. Extension trait:");
    let brand = car.chain().attr(|c| &c.brand);
    println!("brand: {:?}", brand.get());

    // 4. Path macro
    println!("\n4. Path macro:");
    let hp = option_rail::chain!(&car => engine?.horsepower);
    println!("macro horsepower: {:?}", hp.get());
}
