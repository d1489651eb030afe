//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;

use crate::config::IconTheme;
use crate::models::DietType;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuCoffee as Breakfast, LuCookingPot as MainCourse, LuDrumstick as NonVeg,
        LuLayoutGrid as All, LuLeafyGreen as Veg, LuPizza as Pizza, LuSandwich as Burger,
        LuSearch as Search, LuShoppingBag as Cart, LuSoup as Soups, LuUtensils as Logo,
        LuUtensilsCrossed as Pasta, LuX as Close,
    };
}

mod bootstrap {
    pub use icondata::{
        BsBag as Cart, BsBasket as Logo, BsBasket2 as MainCourse, BsBasket3 as Burger,
        BsCup as Soups, BsCupHot as Breakfast, BsEggFried as NonVeg, BsFlower1 as Veg,
        BsGrid as All, BsPieChart as Pizza, BsSearch as Search, BsShop as Pasta,
        BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

themed_icon!(LOGO, Logo);
themed_icon!(SEARCH, Search);
themed_icon!(CART, Cart);
themed_icon!(CLOSE, Close);
themed_icon!(VEG, Veg);
themed_icon!(NON_VEG, NonVeg);
themed_icon!(ALL, All);
themed_icon!(BREAKFAST, Breakfast);
themed_icon!(SOUPS, Soups);
themed_icon!(PASTA, Pasta);
themed_icon!(MAIN_COURSE, MainCourse);
themed_icon!(PIZZA, Pizza);
themed_icon!(BURGER, Burger);

/// Icon for a category tile, looked up by its `icon_ref`.
///
/// Unknown handles fall back to the logo icon.
pub fn category_icon(icon_ref: &str) -> Icon {
    match icon_ref {
        "all" => ALL,
        "breakfast" => BREAKFAST,
        "soups" => SOUPS,
        "pasta" => PASTA,
        "main_course" => MAIN_COURSE,
        "pizza" => PIZZA,
        "burger" => BURGER,
        _ => LOGO,
    }
}

/// Icon shown next to the diet label on item cards.
pub fn diet_icon(diet: DietType) -> Icon {
    match diet {
        DietType::Veg => VEG,
        DietType::NonVeg => NON_VEG,
    }
}
