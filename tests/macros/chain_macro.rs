use option_rail::{chain, get_value};

struct Engine {
    horsepower: u32,
}

struct Car {
    brand: String,
    engine: Option<Engine>,
}

struct Garage {
    car: Option<Car>,
}

fn full_garage() -> Garage {
    Garage {
        car: Some(Car {
            brand: "koenigsegg".into(),
            engine: Some(Engine { horsepower: 1600 }),
        }),
    }
}

#[test]
fn macro_without_path_builds_a_root_proxy() {
    let garage = full_garage();
    let root = chain!(&garage);

    assert!(!root.is_present());
    assert!(root.get().is_some());
}

#[test]
fn macro_traverses_plain_and_optional_fields() {
    let garage = full_garage();

    let brand = chain!(&garage => car?.brand);
    assert_eq!(brand.get().map(String::as_str), Some("koenigsegg"));

    let hp = chain!(&garage => car?.engine?.horsepower);
    assert!(hp.is_present());
    assert_eq!(get_value(hp, None), Some(&1600));
}

#[test]
fn macro_short_circuits_on_none() {
    let garage = Garage { car: None };

    let hp = chain!(&garage => car?.engine?.horsepower);
    assert!(!hp.is_present());
    assert_eq!(hp.get(), None);
    assert_eq!(hp.get_or(&0), &0);
}

#[test]
fn macro_path_ending_on_optional_field() {
    let garage = Garage {
        car: Some(Car {
            brand: "lada".into(),
            engine: None,
        }),
    };

    let engine = chain!(&garage => car?.engine?);
    assert!(!engine.is_present());

    let brand = chain!(&garage => car?.brand);
    assert!(brand.is_present());
}

#[test]
fn macro_accepts_an_absent_root() {
    let hp = chain!(None::<&Garage> => car?.engine?.horsepower);
    assert!(!hp.is_present());
}
