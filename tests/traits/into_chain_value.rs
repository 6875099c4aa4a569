use option_rail::{chain, ChainProxy, IntoChainValue};

struct User {
    id: u32,
}

#[test]
fn plain_reference_seeds_a_value() {
    let user = User { id: 7 };
    let value = (&user).into_chain_value();

    assert!(value.is_some());
    assert_eq!(value.map(|u| u.id), Some(7));
}

#[test]
fn optional_reference_passes_through() {
    let user = User { id: 7 };

    let some: Option<&User> = Some(&user);
    assert!(some.into_chain_value().is_some());

    let none: Option<&User> = None;
    assert!(none.into_chain_value().is_none());
}

#[test]
fn chain_accepts_both_root_shapes() {
    let user = User { id: 7 };

    let id = chain(&user).attr(|u| &u.id);
    assert_eq!(id.get(), Some(&7));

    let absent: ChainProxy<'_, User> = chain(None::<&User>);
    let id = absent.attr(|u| &u.id);
    assert!(!id.is_present());
}

#[test]
fn optional_local_seeds_via_as_ref() {
    let maybe_user: Option<User> = Some(User { id: 7 });

    let id = chain(maybe_user.as_ref()).attr(|u| &u.id);
    assert_eq!(id.get(), Some(&7));

    let no_user: Option<User> = None;
    let id = chain(no_user.as_ref()).attr(|u| &u.id);
    assert_eq!(id.get(), None);
}
