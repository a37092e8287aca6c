use crate::models::plant::{Category, Plant, PlantLibrary};

/// (id, name, category, plants per square, days to maturity, sow indoors, plant out)
///
/// Densities follow the usual square-foot layouts: 1, 4, 9 or 16 plants per
/// square, with sprawling crops taking several squares each.
const CATALOGUE: &[(&str, &str, Category, f64, u32, Option<i32>, Option<i32>)] = &[
    ("tomato", "Tomato", Category::Fruit, 1.0, 70, Some(-6), Some(2)),
    ("pepper", "Pepper", Category::Fruit, 1.0, 75, Some(-8), Some(2)),
    ("eggplant", "Eggplant", Category::Fruit, 1.0, 80, Some(-8), Some(3)),
    ("cucumber", "Cucumber", Category::Fruit, 0.5, 55, Some(-3), Some(2)),
    ("strawberry", "Strawberry", Category::Fruit, 0.25, 90, None, Some(-2)),
    ("zucchini", "Zucchini", Category::Vegetable, 2.0, 50, Some(-3), Some(2)),
    ("winter-squash", "Winter squash", Category::Vegetable, 3.0, 100, Some(-3), Some(2)),
    ("bush-bean", "Bush bean", Category::Vegetable, 1.0 / 9.0, 55, None, Some(1)),
    ("pea", "Pea", Category::Vegetable, 0.125, 60, None, Some(-4)),
    ("broccoli", "Broccoli", Category::Vegetable, 1.0, 70, Some(-8), Some(-2)),
    ("cabbage", "Cabbage", Category::Vegetable, 1.0, 75, Some(-8), Some(-2)),
    ("corn", "Sweet corn", Category::Vegetable, 0.25, 80, None, Some(2)),
    ("lettuce", "Lettuce", Category::Leafy, 0.25, 45, Some(-6), Some(-2)),
    ("spinach", "Spinach", Category::Leafy, 1.0 / 9.0, 40, None, Some(-4)),
    ("chard", "Swiss chard", Category::Leafy, 0.25, 55, None, Some(-2)),
    ("kale", "Kale", Category::Leafy, 1.0, 55, Some(-6), Some(-3)),
    ("carrot", "Carrot", Category::Root, 0.0625, 70, None, Some(-3)),
    ("radish", "Radish", Category::Root, 0.0625, 25, None, Some(-4)),
    ("beet", "Beet", Category::Root, 1.0 / 9.0, 55, None, Some(-3)),
    ("onion", "Onion", Category::Root, 1.0 / 9.0, 100, Some(-10), Some(-4)),
    ("garlic", "Garlic", Category::Root, 1.0 / 9.0, 240, None, None),
    ("basil", "Basil", Category::Herb, 0.25, 60, Some(-6), Some(1)),
    ("parsley", "Parsley", Category::Herb, 0.25, 75, Some(-10), Some(-2)),
    ("cilantro", "Cilantro", Category::Herb, 1.0 / 9.0, 50, None, Some(-1)),
    ("chives", "Chives", Category::Herb, 1.0 / 9.0, 80, Some(-8), Some(-2)),
    ("marigold", "Marigold", Category::Flower, 0.25, 50, Some(-6), Some(1)),
    ("nasturtium", "Nasturtium", Category::Flower, 1.0, 55, None, Some(1)),
];

/// The built-in plant catalogue, in display order.
pub fn built_in_plants() -> Vec<Plant> {
    CATALOGUE
        .iter()
        .map(
            |&(id, name, category, per_square, days, sow_indoors, plant_out)| Plant {
                id: id.into(),
                name: name.into(),
                category,
                squares_per_plant: per_square,
                days_to_maturity: days,
                sow_indoors_weeks: sow_indoors,
                plant_out_weeks: plant_out,
            },
        )
        .collect()
}

pub fn built_in_library() -> PlantLibrary {
    PlantLibrary::new(built_in_plants())
}
