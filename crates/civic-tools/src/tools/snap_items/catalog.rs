use super::domain::{ItemCategory, ItemStatus, SnapItem};

// Item determinations follow Indiana's 2026 SNAP waiver as published by FSSA:
// candy and sugary drinks are excluded, with three recurring carve-outs.
// Refrigeration rule: foods that require refrigeration or freezing stay
// eligible even when sweetened. Flour rule: items where grain or flour is the
// primary ingredient are food, not candy. Sugary drink rule: beverages with
// added sweeteners and no milk, juice, or protein are excluded.
pub(crate) static CATALOG: &[SnapItem] = &[
    SnapItem {
        id: 1,
        name: "Coca-Cola (12-pack)",
        category: ItemCategory::Beverages,
        status: ItemStatus::NotEligible,
        reason: "Sweetened soda with no milk, juice, or protein content",
        notes: Some(
            "Excluded under the Indiana waiver effective January 1, 2026. FSSA lists a retailer transition period through March 31, 2026.",
        ),
    },
    SnapItem {
        id: 2,
        name: "Gatorade",
        category: ItemCategory::Beverages,
        status: ItemStatus::NotEligible,
        reason: "Sports drink with added sweeteners and no milk, juice, or protein",
        notes: None,
    },
    SnapItem {
        id: 3,
        name: "100% Orange Juice",
        category: ItemCategory::Beverages,
        status: ItemStatus::Eligible,
        reason: "100% juice is exempt from the sugary drink exclusion",
        notes: None,
    },
    SnapItem {
        id: 4,
        name: "Sparkling Water (unsweetened)",
        category: ItemCategory::Beverages,
        status: ItemStatus::Eligible,
        reason: "No added sweeteners",
        notes: None,
    },
    SnapItem {
        id: 5,
        name: "Bottled Sweet Tea",
        category: ItemCategory::Beverages,
        status: ItemStatus::NotEligible,
        reason: "Added sugar with no milk, juice, or protein",
        notes: None,
    },
    SnapItem {
        id: 6,
        name: "Diet Soda",
        category: ItemCategory::Beverages,
        status: ItemStatus::NotEligible,
        reason: "Artificial sweeteners count as added sweeteners under the waiver",
        notes: None,
    },
    SnapItem {
        id: 7,
        name: "Ready-to-Drink Protein Shake",
        category: ItemCategory::Beverages,
        status: ItemStatus::CheckLabel,
        reason: "Eligible when it contains milk or protein; the label decides",
        notes: Some(
            "A product sold with a Supplement Facts panel instead of Nutrition Facts is not SNAP eligible regardless of sweetener content.",
        ),
    },
    SnapItem {
        id: 8,
        name: "Energy Drink",
        category: ItemCategory::Beverages,
        status: ItemStatus::CheckLabel,
        reason: "Sweetened versions are excluded; supplement-labeled versions were never eligible",
        notes: None,
    },
    SnapItem {
        id: 9,
        name: "Lemonade Drink Mix",
        category: ItemCategory::Beverages,
        status: ItemStatus::NotEligible,
        reason: "Powdered drink mix with added sugar",
        notes: None,
    },
    SnapItem {
        id: 10,
        name: "Potato Chips",
        category: ItemCategory::Snacks,
        status: ItemStatus::Eligible,
        reason: "Savory snack foods are unaffected by the waiver",
        notes: None,
    },
    SnapItem {
        id: 11,
        name: "Granola Bar",
        category: ItemCategory::Snacks,
        status: ItemStatus::Eligible,
        reason: "Grain is the primary ingredient (flour rule)",
        notes: None,
    },
    SnapItem {
        id: 12,
        name: "Chocolate Chip Cookies",
        category: ItemCategory::Snacks,
        status: ItemStatus::Eligible,
        reason: "Flour is the primary ingredient, so the candy exclusion does not apply",
        notes: None,
    },
    SnapItem {
        id: 13,
        name: "Pop-Tarts",
        category: ItemCategory::Snacks,
        status: ItemStatus::Eligible,
        reason: "Flour-based pastry (flour rule)",
        notes: None,
    },
    SnapItem {
        id: 14,
        name: "Saltine Crackers",
        category: ItemCategory::Snacks,
        status: ItemStatus::Eligible,
        reason: "Staple grain product",
        notes: None,
    },
    SnapItem {
        id: 15,
        name: "Pretzels",
        category: ItemCategory::Snacks,
        status: ItemStatus::Eligible,
        reason: "Flour is the primary ingredient",
        notes: None,
    },
    SnapItem {
        id: 16,
        name: "Trail Mix with Chocolate Pieces",
        category: ItemCategory::Snacks,
        status: ItemStatus::CheckLabel,
        reason: "Candy-coated pieces can trigger the candy exclusion at the register",
        notes: Some("Plain nut-and-fruit mixes are eligible; mixes that are mostly candy pieces may scan as candy."),
    },
    SnapItem {
        id: 17,
        name: "Rice Crispy Treat",
        category: ItemCategory::Snacks,
        status: ItemStatus::CheckLabel,
        reason: "Grain-based, but marshmallow-heavy versions may be classified as candy",
        notes: None,
    },
    SnapItem {
        id: 18,
        name: "Kit Kat",
        category: ItemCategory::Candy,
        status: ItemStatus::Eligible,
        reason: "Wafer candy containing flour falls under the flour rule",
        notes: Some(
            "The federal candy definition excludes flour-containing products, so flour-based candy bars remain eligible even under the Indiana waiver.",
        ),
    },
    SnapItem {
        id: 19,
        name: "Hershey's Milk Chocolate Bar",
        category: ItemCategory::Candy,
        status: ItemStatus::NotEligible,
        reason: "Shelf-stable candy with no flour",
        notes: None,
    },
    SnapItem {
        id: 20,
        name: "Twix",
        category: ItemCategory::Candy,
        status: ItemStatus::CheckLabel,
        reason: "Cookie center contains flour, but some registers still flag it as candy",
        notes: None,
    },
    SnapItem {
        id: 21,
        name: "Gummy Bears",
        category: ItemCategory::Candy,
        status: ItemStatus::NotEligible,
        reason: "Candy with no flour, no refrigeration required",
        notes: None,
    },
    SnapItem {
        id: 22,
        name: "M&M's",
        category: ItemCategory::Candy,
        status: ItemStatus::NotEligible,
        reason: "Shelf-stable candy with no flour",
        notes: None,
    },
    SnapItem {
        id: 23,
        name: "Skittles",
        category: ItemCategory::Candy,
        status: ItemStatus::NotEligible,
        reason: "Shelf-stable candy with no flour",
        notes: None,
    },
    SnapItem {
        id: 24,
        name: "Whole Milk",
        category: ItemCategory::Dairy,
        status: ItemStatus::Eligible,
        reason: "Staple dairy product",
        notes: None,
    },
    SnapItem {
        id: 25,
        name: "Chocolate Milk",
        category: ItemCategory::Dairy,
        status: ItemStatus::Eligible,
        reason: "Contains milk, so the sugary drink exclusion does not apply",
        notes: None,
    },
    SnapItem {
        id: 26,
        name: "Cheddar Cheese",
        category: ItemCategory::Dairy,
        status: ItemStatus::Eligible,
        reason: "Staple dairy product",
        notes: None,
    },
    SnapItem {
        id: 27,
        name: "Strawberry Yogurt",
        category: ItemCategory::Dairy,
        status: ItemStatus::Eligible,
        reason: "Requires refrigeration (refrigeration rule)",
        notes: None,
    },
    SnapItem {
        id: 28,
        name: "Vanilla Ice Cream",
        category: ItemCategory::Frozen,
        status: ItemStatus::Eligible,
        reason: "Requires freezing, so it is food rather than candy",
        notes: None,
    },
    SnapItem {
        id: 29,
        name: "Frozen Popsicles",
        category: ItemCategory::Frozen,
        status: ItemStatus::Eligible,
        reason: "Requires freezing (refrigeration rule)",
        notes: None,
    },
    SnapItem {
        id: 30,
        name: "Frozen Pizza",
        category: ItemCategory::Frozen,
        status: ItemStatus::Eligible,
        reason: "Frozen food intended for home preparation",
        notes: None,
    },
    SnapItem {
        id: 31,
        name: "Frozen Mixed Vegetables",
        category: ItemCategory::Frozen,
        status: ItemStatus::Eligible,
        reason: "Staple frozen food",
        notes: None,
    },
    SnapItem {
        id: 32,
        name: "Daily Multivitamin",
        category: ItemCategory::Supplements,
        status: ItemStatus::NotEligible,
        reason: "Carries a Supplement Facts panel",
        notes: None,
    },
    SnapItem {
        id: 33,
        name: "Whey Protein Powder",
        category: ItemCategory::Supplements,
        status: ItemStatus::CheckLabel,
        reason: "Nutrition Facts panel means food; Supplement Facts means excluded",
        notes: None,
    },
    SnapItem {
        id: 34,
        name: "Meal Replacement Shake",
        category: ItemCategory::Supplements,
        status: ItemStatus::CheckLabel,
        reason: "Label panel determines eligibility",
        notes: Some("Ensure and similar shakes are sold under both label types depending on the product line."),
    },
    SnapItem {
        id: 35,
        name: "Energy Bar",
        category: ItemCategory::Supplements,
        status: ItemStatus::CheckLabel,
        reason: "Label panel determines eligibility; many are sold as supplements",
        notes: None,
    },
    SnapItem {
        id: 36,
        name: "White Bread",
        category: ItemCategory::Staples,
        status: ItemStatus::Eligible,
        reason: "Staple grain product",
        notes: None,
    },
    SnapItem {
        id: 37,
        name: "Long-Grain Rice",
        category: ItemCategory::Staples,
        status: ItemStatus::Eligible,
        reason: "Staple grain product",
        notes: None,
    },
    SnapItem {
        id: 38,
        name: "Eggs (dozen)",
        category: ItemCategory::Staples,
        status: ItemStatus::Eligible,
        reason: "Staple protein",
        notes: None,
    },
    SnapItem {
        id: 39,
        name: "All-Purpose Flour",
        category: ItemCategory::Staples,
        status: ItemStatus::Eligible,
        reason: "Staple baking ingredient",
        notes: None,
    },
    SnapItem {
        id: 40,
        name: "Bakery Birthday Cake",
        category: ItemCategory::Staples,
        status: ItemStatus::Eligible,
        reason: "Flour is the primary ingredient; cold bakery items are eligible",
        notes: None,
    },
    SnapItem {
        id: 41,
        name: "Hot Rotisserie Chicken",
        category: ItemCategory::Staples,
        status: ItemStatus::NotEligible,
        reason: "Hot prepared foods are excluded from SNAP",
        notes: Some("This federal exclusion predates the Indiana waiver."),
    },
    SnapItem {
        id: 42,
        name: "Infant Formula",
        category: ItemCategory::Baby,
        status: ItemStatus::Eligible,
        reason: "Staple infant food",
        notes: None,
    },
    SnapItem {
        id: 43,
        name: "Jarred Baby Food",
        category: ItemCategory::Baby,
        status: ItemStatus::Eligible,
        reason: "Staple infant food",
        notes: None,
    },
    SnapItem {
        id: 44,
        name: "Diapers",
        category: ItemCategory::Baby,
        status: ItemStatus::NotEligible,
        reason: "Non-food household item",
        notes: None,
    },
];
