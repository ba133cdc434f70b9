use hofkit::prelude::*;
use proptest::prelude::*;

fn is_subsequence(sub: &[i64], full: &[i64]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|x| rest.any(|y| y == x))
}

proptest! {
    #[test]
    fn greater_than_boundary(n in i64::MIN..i64::MAX) {
        let p = greater_than(n);
        prop_assert!(!p.matches(&n));
        prop_assert!(p.matches(&(n + 1)));
    }

    #[test]
    fn even_filter_keeps_only_evens_in_order(items in prop::collection::vec(any::<i64>(), 0..64)) {
        let evens = filter(&items, &even());
        prop_assert!(evens.iter().all(|n| n % 2 == 0));
        prop_assert!(evens.len() <= items.len());
        prop_assert!(is_subsequence(&evens, &items));
        prop_assert_eq!(evens.len(), items.iter().filter(|n| *n % 2 == 0).count());
    }

    #[test]
    fn filtering_twice_changes_nothing(
        items in prop::collection::vec(-1000_i64..1000, 0..64),
        min in -1000_i64..1000,
    ) {
        let p = greater_than(min);
        let once = filter(&items, &p);
        prop_assert_eq!(filter(&once, &p), once.clone());

        let q = even();
        let once = filter(&items, &q);
        prop_assert_eq!(filter(&once, &q), once);
    }

    #[test]
    fn multiple_of_agrees_with_remainder(n in any::<i64>().prop_filter("non-zero", |n| *n != 0), item in -10_000_i64..10_000) {
        let p = multiple_of(n).unwrap();
        prop_assert_eq!(p.matches(&item), item % n == 0);
    }

    #[test]
    fn tag_wrapper_wraps_any_message(tag in "\\PC{1,12}", msg in "\\PC*") {
        let f = tag_wrapper(tag.as_str()).unwrap();
        prop_assert_eq!(f.apply(&msg), format!("<{tag}>{msg}</{tag}>"));
    }

    #[test]
    fn map_all_preserves_length_and_order(items in prop::collection::vec("[a-zA-Z ]{0,16}", 0..32)) {
        let li = tag_wrapper("li").unwrap();
        let rendered = map_all(&items, &li);
        prop_assert_eq!(rendered.len(), items.len());
        for (out, item) in rendered.iter().zip(&items) {
            prop_assert_eq!(out, &format!("<li>{item}</li>"));
        }
    }
}

#[test]
fn empty_tag_is_invalid() {
    assert!(matches!(
        tag_wrapper(""),
        Err(HofError::InvalidArgument { name: "tag", .. })
    ));
}
