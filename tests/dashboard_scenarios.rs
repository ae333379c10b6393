use amazon_sales_dashboard::config::ColumnNames;
use amazon_sales_dashboard::{
    load_shared, DataLoader, ProductRecord, ProductTable, Ranking, RankedEntry, Section,
    SectionParams, SectionView, TopN,
};
use std::io::Write;

fn rated(category: &str, rating: f64) -> ProductRecord {
    ProductRecord::new(category, "item").with_rating(rating)
}

#[test]
fn scenario_a_total_rating_by_category() {
    let table = ProductTable::from_records(&[
        rated("Electronics", 4.0),
        rated("Electronics", 5.0),
        rated("Books", 3.0),
    ])
    .unwrap();

    let result = Ranking::top_categories_by_total_rating(&table, TopN::try_new(2).unwrap()).unwrap();

    assert_eq!(
        result.entries,
        vec![
            RankedEntry {
                key: "Electronics".into(),
                value: 9.0
            },
            RankedEntry {
                key: "Books".into(),
                value: 3.0
            },
        ]
    );
}

#[test]
fn scenario_b_null_discount_excluded_from_mean() {
    let table = ProductTable::from_records(&[
        ProductRecord::new("Home", "a").with_discount(Some(10.0)),
        ProductRecord::new("Home", "b").with_discount(None),
        ProductRecord::new("Home", "c").with_discount(Some(30.0)),
    ])
    .unwrap();

    let result =
        Ranking::top_categories_by_average_discount(&table, TopN::DEFAULT).unwrap();

    assert_eq!(result.values(), vec![20.0]);
}

#[test]
fn scenario_c_empty_table_gives_empty_sequences() {
    let table = ProductTable::empty();
    let n = TopN::DEFAULT;

    assert!(Ranking::top_categories_by_total_rating(&table, n).unwrap().is_empty());
    assert!(Ranking::top_categories_by_average_discount(&table, n).unwrap().is_empty());
    assert!(Ranking::top_products_by_review_count(&table, n).unwrap().is_empty());
}

#[test]
fn scenario_d_oversized_count_is_not_padded() {
    let table = ProductTable::from_records(&[
        rated("Electronics", 4.0),
        rated("Books", 3.0),
        rated("Toys", 2.0),
    ])
    .unwrap();

    let result = Ranking::top_categories_by_total_rating(&table, TopN::clamped(100)).unwrap();

    assert_eq!(result.len(), 3);
}

#[test]
fn every_section_computes_on_empty_table() {
    let table = ProductTable::empty();
    for section in Section::ALL {
        let view = SectionView::compute(&table, section, SectionParams::default()).unwrap();
        assert_eq!(view.section(), section);
        assert!(view.tables().iter().all(|t| t.is_empty()));
    }
}

#[test]
fn csv_to_report_end_to_end() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    write!(
        file,
        "product_name,main_category,discounted_price,actual_price,discount_percentage,rating,rating_count\n\
         Cable,Electronics,199,499,60,4.2,24269\n\
         Charger,Electronics,599,999,40,4.0,800\n\
         Novel,Books,270,300,10,3.9,1500\n\
         Lamp,Home,,,,,\n"
    )
    .unwrap();
    file.flush().unwrap();

    // The first load wins for the whole process; later calls reuse it.
    let first = load_shared(file.path(), &ColumnNames::default()).unwrap();
    let second = load_shared(std::path::Path::new("ignored.csv"), &ColumnNames::default()).unwrap();
    assert!(std::ptr::eq(first, second));
    assert_eq!(first.len(), 4);

    let view = SectionView::compute(first, Section::Categories, SectionParams::default()).unwrap();
    let tables = view.tables();
    assert_eq!(tables[0].keys(), vec!["Electronics", "Books", "Home"]);
    assert_eq!(tables[1].keys(), vec!["Electronics", "Books"]);

    let json = serde_json::to_string(&view).unwrap();
    assert!(json.contains("\"section\":\"categories\""));
}

#[test]
fn nan_cells_are_treated_as_missing() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    write!(
        file,
        "product_name,main_category,discounted_price,actual_price,discount_percentage,rating,rating_count\n\
         A,Books,100,200,10,4.0,5\n\
         B,Books,NaN,NaN,NaN,NaN,NaN\n\
         C,Toys,80,100,20,4.5,3\n"
    )
    .unwrap();
    file.flush().unwrap();

    let table = DataLoader::new(file.path(), ColumnNames::default())
        .load()
        .unwrap();
    let n = TopN::DEFAULT;

    let total = Ranking::top_categories_by_total_rating(&table, n).unwrap();
    assert_eq!(total.keys(), vec!["Toys", "Books"]);
    assert_eq!(total.values(), vec![4.5, 4.0]);

    let discount = Ranking::top_categories_by_average_discount(&table, n).unwrap();
    assert_eq!(discount.keys(), vec!["Toys", "Books"]);
    assert_eq!(discount.values(), vec![20.0, 10.0]);

    let products = Ranking::top_products_by_review_count(&table, n).unwrap();
    assert_eq!(products.keys(), vec!["A", "C"]);
}

#[test]
fn missing_file_is_fatal_error() {
    let err = DataLoader::new("does/not/exist.csv", ColumnNames::default())
        .load()
        .unwrap_err();
    assert!(err.to_string().contains("Data unavailable"));
}
