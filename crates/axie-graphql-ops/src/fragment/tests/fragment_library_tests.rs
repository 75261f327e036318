use crate::fragment::FragmentLibrary;
use crate::fragment::FragmentLibraryBuilder;
use crate::fragment::FragmentNotFoundError;

fn diamond_library() -> FragmentLibrary {
    let mut builder = FragmentLibraryBuilder::new();
    for source in [
        "fragment OrderInfo on Order { assets { ...AssetInfo } seller { ...ProfileBrief } }",
        "fragment ProfileBrief on PublicProfile { accountId ...AddressInfo }",
        "fragment AssetInfo on Asset { id owner { ...AddressInfo } }",
        "fragment AddressInfo on Address { ronin }",
        "fragment Unused on Axie { id }",
    ] {
        builder.add_from_str(source).unwrap();
    }
    builder.build().unwrap()
}

fn closure_names(library: &FragmentLibrary, roots: &[&str]) -> Vec<String> {
    library.closure(roots)
        .unwrap()
        .into_iter()
        .map(|fragment| fragment.name().to_string())
        .collect()
}

#[test]
fn get_known_and_unknown() {
    let library = diamond_library();
    assert_eq!(library.get("AssetInfo").unwrap().type_condition(), "Asset");
    assert!(library.contains("Unused"));
    assert_eq!(
        library.get("Nope"),
        Err(FragmentNotFoundError { fragment_name: "Nope".to_string() }),
    );
}

/// Two branches pull in `AddressInfo`; it must appear once, at its first
/// depth-first pre-order visit.
#[test]
fn closure_is_depth_first_preorder_without_duplicates() {
    let library = diamond_library();
    assert_eq!(
        closure_names(&library, &["OrderInfo"]),
        vec!["OrderInfo", "AssetInfo", "AddressInfo", "ProfileBrief"],
    );
}

#[test]
fn closure_follows_root_order() {
    let library = diamond_library();
    assert_eq!(
        closure_names(&library, &["AddressInfo", "OrderInfo"]),
        vec!["AddressInfo", "OrderInfo", "AssetInfo", "ProfileBrief"],
    );
}

#[test]
fn closure_of_no_roots_is_empty() {
    let library = diamond_library();
    assert!(library.closure::<&str>(&[]).unwrap().is_empty());
}

#[test]
fn closure_with_unknown_root_fails() {
    let library = diamond_library();
    assert_eq!(
        library.closure(&["OrderInfo", "Missing"]).unwrap_err().fragment_name,
        "Missing",
    );
}

#[test]
fn closure_is_deterministic() {
    let library = diamond_library();
    let first = closure_names(&library, &["OrderInfo", "Unused"]);
    for _ in 0..10 {
        assert_eq!(closure_names(&library, &["OrderInfo", "Unused"]), first);
    }
}
