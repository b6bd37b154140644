use super::{ids, sample};
use writerdesk::catalog::{format_price, visible_items, Category, FilterState, Format, PriceRange, SortKey};

fn filter_with(update: impl FnOnce(&mut FilterState)) -> FilterState {
    let mut filter = FilterState::default();
    update(&mut filter);
    filter
}

#[test]
fn test_default_filter_shows_everything_featured_first() {
    let items = sample();
    let visible = visible_items(&items, &FilterState::default());
    assert_eq!(ids(visible), vec!["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn test_query_bitcoin_matches_title_author_or_tag() {
    let items = sample();
    let filter = filter_with(|f| f.query = "bitcoin".to_string());
    // "The Age of Cryptocurrency" only mentions Bitcoin in its description
    assert_eq!(ids(visible_items(&items, &filter)), vec!["1", "2", "3", "4", "5"]);

    let shouting = filter_with(|f| f.query = "BITCOIN".to_string());
    assert_eq!(visible_items(&items, &shouting).len(), 5);
}

#[test]
fn test_query_python_matches_tag_only() {
    let items = sample();
    let filter = filter_with(|f| f.query = "python".to_string());
    assert_eq!(ids(visible_items(&items, &filter)), vec!["3"]);
}

#[test]
fn test_query_matches_author() {
    let items = sample();
    let filter = filter_with(|f| f.query = "antonopoulos".to_string());
    assert_eq!(ids(visible_items(&items, &filter)), vec!["2", "4"]);
}

#[test]
fn test_query_does_not_search_description() {
    let items = sample();
    let filter = filter_with(|f| f.query = "untold story".to_string());
    assert!(visible_items(&items, &filter).is_empty());
}

#[test]
fn test_category_and_format_filters() {
    let items = sample();

    let technical = filter_with(|f| f.category = Some(Category::Technical));
    assert_eq!(ids(visible_items(&items, &technical)), vec!["2", "3"]);

    let audio = filter_with(|f| f.format = Some(Format::Audiobook));
    assert_eq!(ids(visible_items(&items, &audio)), vec!["4"]);

    let none = filter_with(|f| {
        f.category = Some(Category::Security);
    });
    assert!(visible_items(&items, &none).is_empty());
}

#[test]
fn test_price_bound_zero_to_twenty() {
    let items = sample();
    let filter = filter_with(|f| f.price = PriceRange::new(0.0, 20.0).unwrap());
    let visible = visible_items(&items, &filter);

    let mut prices: Vec<f64> = visible.iter().map(|item| item.price).collect();
    prices.sort_by(f64::total_cmp);
    assert_eq!(prices, vec![18.99, 19.99]);
}

#[test]
fn test_price_bounds_are_inclusive() {
    let items = sample();
    let filter = filter_with(|f| f.price = PriceRange::new(18.99, 18.99).unwrap());
    assert_eq!(ids(visible_items(&items, &filter)), vec!["6"]);
}

#[test]
fn test_visible_set_is_the_conjunctive_predicate() {
    let items = sample();
    let queries = ["", "bitcoin", "andreas", "economics", "zzz"];
    let categories = [None, Some(Category::Economics), Some(Category::Technical)];
    let formats = [None, Some(Format::Ebook), Some(Format::Hardcover)];
    let maxima = [100.0, 25.0, 19.0];

    for query in queries {
        for category in categories {
            for format in formats {
                for max in maxima {
                    let filter = FilterState {
                        query: query.to_string(),
                        category,
                        format,
                        price: PriceRange::new(0.0, max).unwrap(),
                        sort: SortKey::Featured,
                    };
                    let visible = visible_items(&items, &filter);

                    for item in &visible {
                        assert!(items.iter().any(|source| source.id == item.id));
                        assert!(filter.includes(item));
                    }
                    let expected = items.iter().filter(|item| filter.includes(item)).count();
                    assert_eq!(visible.len(), expected, "filter {:?}", filter);
                }
            }
        }
    }
}

#[test]
fn test_sort_orders() {
    let items = sample();
    let sorted = |sort: SortKey| {
        let filter = filter_with(|f| f.sort = sort);
        ids(visible_items(&items, &filter))
            .into_iter()
            .map(str::to_string)
            .collect::<Vec<_>>()
    };

    assert_eq!(sorted(SortKey::PriceLow), vec!["6", "4", "5", "1", "3", "2"]);
    assert_eq!(sorted(SortKey::PriceHigh), vec!["2", "3", "1", "5", "4", "6"]);
    assert_eq!(sorted(SortKey::Rating), vec!["2", "4", "1", "5", "3", "6"]);
    assert_eq!(sorted(SortKey::Newest), vec!["3", "1", "2", "4", "5", "6"]);
    assert_eq!(sorted(SortKey::Bestseller), vec!["1", "5", "2", "3", "4", "6"]);
    assert_eq!(sorted(SortKey::Featured), vec!["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn test_sort_is_stable_for_ties() {
    let mut items = sample();
    for item in &mut items {
        item.price = 10.0;
        item.rating = 4.0;
    }
    for sort in [SortKey::PriceLow, SortKey::PriceHigh, SortKey::Rating] {
        let filter = filter_with(|f| f.sort = sort);
        assert_eq!(ids(visible_items(&items, &filter)), vec!["1", "2", "3", "4", "5", "6"]);
    }
}

#[test]
fn test_sort_is_idempotent() {
    let items = sample();
    for sort in SortKey::ALL {
        let filter = filter_with(|f| f.sort = sort);
        let once: Vec<_> = visible_items(&items, &filter).into_iter().cloned().collect();
        let twice: Vec<_> = visible_items(&once, &filter).into_iter().cloned().collect();
        assert_eq!(once, twice, "sort {:?}", sort);
    }
}

#[test]
fn test_recompute_never_mutates_source() {
    let items = sample();
    let before = items.clone();
    let filter = filter_with(|f| {
        f.sort = SortKey::PriceHigh;
        f.query = "bitcoin".to_string();
    });
    let _ = visible_items(&items, &filter);
    assert_eq!(items, before);
}

#[test]
fn test_price_range_invariant() {
    assert!(PriceRange::new(30.0, 20.0).is_err());
    assert!(PriceRange::new(f64::NAN, 20.0).is_err());

    let mut range = PriceRange::new(10.0, 50.0).unwrap();
    range.set_max(5.0);
    assert_eq!(range.max(), 10.0);
    assert!(range.min() <= range.max());

    range.set_max(f64::NAN);
    assert_eq!(range.max(), 10.0);

    let default = PriceRange::default();
    assert_eq!((default.min(), default.max()), (0.0, 100.0));
}

#[test]
fn test_sort_key_cycle_and_parse() {
    assert_eq!(SortKey::default(), SortKey::Featured);
    assert_eq!(SortKey::Bestseller.next(), SortKey::Featured);
    assert_eq!("price-low".parse::<SortKey>().unwrap(), SortKey::PriceLow);
    assert!("cheapest".parse::<SortKey>().is_err());
    assert_eq!(SortKey::Rating.label(), "Customer Rating");
}

#[test]
fn test_item_display_helpers() {
    let items = sample();
    let standard = &items[0];
    assert_eq!(standard.star_counts(), (4, 1, 0));
    assert_eq!(standard.discount_percent(), Some(17));
    assert_eq!(items[5].discount_percent(), Some(24));
    assert_eq!(items[1].discount_percent(), None);

    let mut whole = standard.clone();
    whole.rating = 4.0;
    assert_eq!(whole.star_counts(), (4, 0, 1));

    assert_eq!(format_price(24.99), "$24.99");
    assert_eq!(format_price(5.0), "$5.00");
}
