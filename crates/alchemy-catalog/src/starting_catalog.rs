//! The canonical element catalog and recipe table shipped with the game.
//!
//! Elements are grouped the way the shop and the inventory group them:
//! basic elements handed out at the start, purchasable absurd ingredients,
//! and everything that can only be crafted. The recipe table is the richer
//! of the two historical tables, consolidated so that every ingredient
//! multiset appears exactly once, plus the chains needed so that every
//! companion request rewards a hint towards a craftable element.

use alchemy_types::{Category, Element, ElementId, LocalizedText, Recipe};

use crate::catalog::ElementCatalog;
use crate::error::CatalogError;
use crate::recipes::RecipeBook;

/// Helper to build an [`Element`] without description.
fn el(id: &str, icon: &str, ru: &str, en: &str, category: Category, price: Option<u32>) -> Element {
    Element {
        id: ElementId::from(id),
        icon: icon.to_owned(),
        name: LocalizedText::new(ru, en),
        category,
        description: None,
        price,
    }
}

/// Helper to build a basic [`Element`] with flavor text.
fn basic(id: &str, icon: &str, ru: &str, en: &str, price: u32, desc: (&str, &str)) -> Element {
    Element {
        description: Some(LocalizedText::new(desc.0, desc.1)),
        ..el(id, icon, ru, en, Category::Basic, Some(price))
    }
}

/// `(id, icon, ru, en, price)` for every purchasable absurd ingredient.
const ABSURD: &[(&str, &str, &str, &str, u32)] = &[
    ("egg", "🥚", "Яйцо", "Egg", 10),
    ("laugh", "😂", "Смех", "Laughter", 15),
    ("dream", "💭", "Мечта", "Dream", 20),
    ("legend", "📖", "Легенда", "Legend", 25),
    ("song", "🎵", "Песня", "Song", 15),
    ("dance", "💃", "Танец", "Dance", 15),
    ("rainbow", "🌈", "Радуга", "Rainbow", 30),
    ("time", "⏰", "Время", "Time", 40),
    ("wisdom", "🧠", "Мудрость", "Wisdom", 35),
    ("horse", "🐴", "Лошадь", "Horse", 25),
    ("cloud", "☁️", "Облако", "Cloud", 12),
    ("love", "❤️", "Любовь", "Love", 50),
    ("chaos", "🌀", "Хаос", "Chaos", 30),
    ("memory", "🧩", "Память", "Memory", 25),
];

/// `(id, icon, ru, en, category)` for every craft-only element.
const CRAFTED: &[(&str, &str, &str, &str, Category)] = &[
    ("steam", "☁️", "Пар", "Steam", Category::Craftable),
    ("lava", "🌋", "Лава", "Lava", Category::Craftable),
    ("ice", "🧊", "Лёд", "Ice", Category::Craftable),
    ("life", "🌱", "Жизнь", "Life", Category::Craftable),
    ("energy", "⚡", "Энергия", "Energy", Category::Craftable),
    ("mud", "🟫", "Грязь", "Mud", Category::Craftable),
    ("dust", "🌪️", "Пыль", "Dust", Category::Craftable),
    ("storm", "⛈️", "Шторм", "Storm", Category::Craftable),
    ("swamp", "🌿", "Болото", "Swamp", Category::Craftable),
    ("plant", "🪴", "Растение", "Plant", Category::Craftable),
    ("rain", "🌧️", "Дождь", "Rain", Category::Craftable),
    ("sea", "🌊", "Море", "Sea", Category::Craftable),
    ("metal", "🔩", "Металл", "Metal", Category::Materials),
    ("gold", "🪙", "Золото", "Gold", Category::Materials),
    ("stone", "🪨", "Камень", "Stone", Category::Materials),
    ("glass", "🪟", "Стекло", "Glass", Category::Materials),
    ("sand", "🏖️", "Песок", "Sand", Category::Materials),
    ("dragon", "🐉", "Дракон", "Dragon", Category::Legendary),
    ("unicorn", "🦄", "Единорог", "Unicorn", Category::Legendary),
    ("phoenix", "🦅", "Феникс", "Phoenix", Category::Legendary),
    ("philosopher_stone", "💎", "Философский камень", "Philosopher's Stone", Category::Legendary),
    ("angel", "👼", "Ангел", "Angel", Category::Creatures),
    ("demon", "😈", "Демон", "Demon", Category::Creatures),
    ("magic", "✨", "Магия", "Magic", Category::Magic),
    ("portal", "🌀", "Портал", "Portal", Category::Magic),
    ("spell", "📜", "Заклинание", "Spell", Category::Magic),
    ("infinity", "♾️", "Бесконечность", "Infinity", Category::Cosmic),
    ("universe", "🌌", "Вселенная", "Universe", Category::Cosmic),
    ("consciousness", "👁️", "Сознание", "Consciousness", Category::Cosmic),
    ("paradox", "🔄", "Парадокс", "Paradox", Category::Cosmic),
    ("singularity", "⚫", "Сингулярность", "Singularity", Category::Cosmic),
    ("void", "🕳️", "Пустота", "Void", Category::Cosmic),
    ("space", "🪐", "Космос", "Space", Category::Cosmic),
    ("robot", "🤖", "Робот", "Robot", Category::Technology),
];

/// `(result, ingredients)` in resolution order.
const RECIPES: &[(&str, &[&str])] = &[
    // Primal pairs
    ("steam", &["fire", "water"]),
    ("mud", &["earth", "water"]),
    ("dust", &["earth", "air"]),
    ("energy", &["fire", "air"]),
    ("lava", &["fire", "earth"]),
    ("storm", &["air", "water"]),
    ("sea", &["water", "water"]),
    ("void", &["darkness", "darkness"]),
    // Nature
    ("rain", &["cloud", "water"]),
    ("plant", &["earth", "rain"]),
    ("swamp", &["mud", "plant"]),
    ("life", &["energy", "swamp"]),
    ("life", &["water", "earth", "dance"]),
    ("steam", &["fire", "water", "cloud"]),
    // Materials
    ("stone", &["water", "lava"]),
    ("metal", &["stone", "fire"]),
    ("sand", &["stone", "air"]),
    ("glass", &["sand", "fire"]),
    ("ice", &["glass", "water"]),
    ("gold", &["metal", "rainbow", "laugh"]),
    // Legends
    ("dragon", &["fire", "egg", "legend"]),
    ("unicorn", &["horse", "dream", "rainbow"]),
    ("phoenix", &["fire", "egg", "time"]),
    ("philosopher_stone", &["stone", "wisdom", "time"]),
    ("angel", &["light", "life"]),
    ("demon", &["darkness", "life"]),
    // Magic
    ("magic", &["light", "darkness", "wisdom"]),
    ("spell", &["magic", "wisdom"]),
    // Cosmos
    ("space", &["void", "air"]),
    ("paradox", &["time", "time"]),
    ("consciousness", &["life", "wisdom"]),
    ("singularity", &["energy", "space", "void"]),
    ("portal", &["chaos", "space", "energy"]),
    ("infinity", &["time", "paradox", "consciousness"]),
    ("universe", &["singularity", "infinity", "consciousness"]),
    // Technology
    ("robot", &["energy", "life", "metal", "wisdom"]),
];

/// Build the standard element catalog.
///
/// # Errors
///
/// Returns [`CatalogError::DuplicateElement`] if two entries share a key
/// (should not happen with the hard-coded data).
pub fn create_standard_catalog() -> Result<ElementCatalog, CatalogError> {
    let primal = ("Первичная стихия", "Primary element");
    let mut catalog = ElementCatalog::new();

    // --- Basic ---
    catalog.insert(basic("fire", "🔥", "Огонь", "Fire", 5, primal))?;
    catalog.insert(basic("water", "💧", "Вода", "Water", 5, primal))?;
    catalog.insert(basic("earth", "🌍", "Земля", "Earth", 5, primal))?;
    catalog.insert(basic("air", "💨", "Воздух", "Air", 5, primal))?;
    catalog.insert(basic("light", "🌟", "Свет", "Light", 8, ("Чистая энергия", "Pure energy")))?;
    catalog.insert(basic(
        "darkness",
        "🌑",
        "Тьма",
        "Darkness",
        8,
        ("Отсутствие света", "Absence of light"),
    ))?;

    // --- Absurd ---
    for &(id, icon, ru, en, price) in ABSURD {
        catalog.insert(el(id, icon, ru, en, Category::Absurd, Some(price)))?;
    }

    // --- Craft-only ---
    for &(id, icon, ru, en, category) in CRAFTED {
        catalog.insert(el(id, icon, ru, en, category, None))?;
    }

    Ok(catalog)
}

/// Build the standard recipe table, unvalidated.
pub fn create_standard_recipes() -> RecipeBook {
    RecipeBook::from_recipes(
        RECIPES
            .iter()
            .map(|(result, ingredients)| Recipe::new(result, ingredients)),
    )
}
