//! Unit tests for by-value Lens optics.

use optica::lens;
use optica::optics::{FunctionLens, IdentityLens, Lens, identity};
use rstest::rstest;

// =============================================================================
// Test Structures
// =============================================================================

#[derive(Clone, PartialEq, Debug)]
struct Address {
    street: String,
    city: String,
}

#[derive(Clone, PartialEq, Debug)]
struct Person {
    name: String,
    age: u32,
    address: Address,
}

#[derive(Clone, PartialEq, Debug)]
struct Wrapper<T> {
    value: T,
}

fn sample_person() -> Person {
    Person {
        name: "Alice".to_string(),
        age: 30,
        address: Address {
            street: "Main St".to_string(),
            city: "Tokyo".to_string(),
        },
    }
}

// =============================================================================
// Basic access
// =============================================================================

#[rstest]
fn test_lens_macro_get() {
    let name = lens!(Person, name);
    assert_eq!(name.get(&sample_person()), "Alice");
}

#[rstest]
fn test_lens_set_returns_new_structure() {
    let age = lens!(Person, age);
    let original = sample_person();
    let updated = age.set(original.clone(), 31);

    assert_eq!(updated.age, 31);
    assert_eq!(original.age, 30);
    assert_eq!(updated.name, original.name);
}

#[rstest]
#[case(0, 1)]
#[case(30, 31)]
#[case(99, 100)]
fn test_lens_modify(#[case] age: u32, #[case] expected: u32) {
    let age_lens = lens!(Person, age);
    let person = Person {
        age,
        ..sample_person()
    };
    assert_eq!(age_lens.modify(person, |age| age + 1).age, expected);
}

#[rstest]
fn test_function_lens_by_hand() {
    let city = FunctionLens::new(
        |address: &Address| address.city.clone(),
        |address: Address, city: String| Address { city, ..address },
    );
    let address = sample_person().address;
    assert_eq!(city.get(&address), "Tokyo");
    assert_eq!(city.set(address, "Osaka".to_string()).city, "Osaka");
}

#[rstest]
fn test_lens_macro_with_generics() {
    let value = lens!(Wrapper<i32>, value);
    let wrapper = Wrapper { value: 1 };
    assert_eq!(value.set(wrapper, 2), Wrapper { value: 2 });
}

// =============================================================================
// Composition
// =============================================================================

#[rstest]
fn test_compose_reaches_nested_field() {
    let street = lens!(Person, address).compose(lens!(Address, street));
    let updated = street.set(sample_person(), "Oak Ave".to_string());

    assert_eq!(street.get(&updated), "Oak Ave");
    assert_eq!(updated.address.city, "Tokyo");
    assert_eq!(updated.name, "Alice");
}

#[rstest]
fn test_compose_is_associative() {
    #[derive(Clone, PartialEq, Debug)]
    struct Company {
        ceo: Person,
    }

    let left = lens!(Company, ceo)
        .compose(lens!(Person, address))
        .compose(lens!(Address, city));
    let right = lens!(Company, ceo).compose(lens!(Person, address).compose(lens!(Address, city)));

    let company = Company {
        ceo: sample_person(),
    };
    assert_eq!(left.get(&company), right.get(&company));
    assert_eq!(
        left.set(company.clone(), "Kyoto".to_string()),
        right.set(company, "Kyoto".to_string())
    );
}

#[rstest]
fn test_identity_is_neutral_for_compose() {
    let name = lens!(Person, name);
    let left = identity::<Person>().compose(lens!(Person, name));
    let right = lens!(Person, name).compose(IdentityLens::<String>::new());

    let person = sample_person();
    assert_eq!(left.get(&person), name.get(&person));
    assert_eq!(right.get(&person), name.get(&person));
    assert_eq!(
        left.set(person.clone(), "Bob".to_string()),
        name.set(person, "Bob".to_string())
    );
}

#[rstest]
fn test_identity_set_replaces_whole() {
    let whole = identity::<u32>();
    assert_eq!(whole.get(&5), 5);
    assert_eq!(whole.set(5, 9), 9);
}

#[rstest]
fn test_imap_changes_focus_type() {
    let age_text = lens!(Person, age).imap(
        |age: u32| age.to_string(),
        |text: String| text.parse().unwrap_or_default(),
    );

    let person = sample_person();
    assert_eq!(age_text.get(&person), "30");
    assert_eq!(age_text.set(person, "42".to_string()).age, 42);
}

#[rstest]
fn test_lens_is_clone() {
    let name = lens!(Person, name);
    let copy = name.clone();
    assert_eq!(copy.get(&sample_person()), name.get(&sample_person()));
}
