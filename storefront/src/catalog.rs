//! Static menu catalog
//!
//! Ingredients for the build-your-own pizza, specialty pizzas and
//! snacks. Lookup helpers are by id; pricing and validation live in
//! [`crate::pricing`].

/// Build-your-own pizza ingredient
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ingredient {
    pub id: &'static str,
    pub name: &'static str,
    /// Counts double towards the pricing tier (camarón)
    pub is_double: bool,
}

impl Ingredient {
    pub fn weight(&self) -> u32 {
        if self.is_double { 2 } else { 1 }
    }
}

/// Mandatory sub-choice on boneless products
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Flavor {
    pub id: &'static str,
    pub name: &'static str,
}

/// Fixed-menu specialty pizza
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Specialty {
    pub id: &'static str,
    pub name: &'static str,
    /// MXN per pizza
    pub price: i64,
    pub description: &'static str,
    /// Non-empty only for the boneless pizza (flavor required)
    pub flavors: &'static [Flavor],
}

/// Side item
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snack {
    pub id: &'static str,
    pub name: &'static str,
    /// MXN per unit
    pub price: i64,
    /// Sales unit ("orden", "250gr")
    pub unit: &'static str,
    pub description: &'static str,
    /// Non-empty means a flavor must be chosen before adding
    pub flavors: &'static [Flavor],
}

pub const BONELESS_FLAVORS: &[Flavor] = &[
    Flavor { id: "bufalo", name: "Búfalo" },
    Flavor { id: "bbq", name: "BBQ" },
    Flavor { id: "habanero", name: "Habanero" },
];

pub const INGREDIENTS: &[Ingredient] = &[
    Ingredient { id: "pepperoni", name: "Peperoni", is_double: false },
    Ingredient { id: "jamon", name: "Jamón", is_double: false },
    Ingredient { id: "salami", name: "Salami", is_double: false },
    Ingredient { id: "salchicha", name: "Salchicha", is_double: false },
    Ingredient { id: "chorizo", name: "Chorizo", is_double: false },
    Ingredient { id: "camaron", name: "Camarón", is_double: true },
    Ingredient { id: "atun", name: "Atún", is_double: false },
    Ingredient { id: "pina", name: "Piña", is_double: false },
    Ingredient { id: "champinon", name: "Champiñón", is_double: false },
    Ingredient { id: "cebolla", name: "Cebolla", is_double: false },
    Ingredient { id: "morron", name: "Morrón", is_double: false },
    Ingredient { id: "jalapeno", name: "Jalapeño", is_double: false },
    Ingredient { id: "aceituna", name: "Aceituna", is_double: false },
    Ingredient { id: "albahaca", name: "Albahaca", is_double: false },
    Ingredient { id: "aceite-oliva", name: "Aceite de Oliva", is_double: false },
];

pub const SPECIALTIES: &[Specialty] = &[
    Specialty {
        id: "hawaiana",
        name: "Hawaiana",
        price: 150,
        description: "Jamón y Piña",
        flavors: &[],
    },
    Specialty {
        id: "meat",
        name: "Meat",
        price: 150,
        description: "Peperoni y Salami",
        flavors: &[],
    },
    Specialty {
        id: "alemana",
        name: "Alemana",
        price: 150,
        description: "Salchicha y Champiñón",
        flavors: &[],
    },
    Specialty {
        id: "margarita",
        name: "Margarita",
        price: 150,
        description: "Albahaca y Aceite de Oliva",
        flavors: &[],
    },
    Specialty {
        id: "americana",
        name: "Americana",
        price: 180,
        description: "Champiñón, Piña y Jamón",
        flavors: &[],
    },
    Specialty {
        id: "vegetariana",
        name: "Vegetariana",
        price: 180,
        description: "Champiñón, Piña y Morrón",
        flavors: &[],
    },
    Specialty {
        id: "italiana",
        name: "Italiana",
        price: 180,
        description: "Champiñón, Jamón, Salami y Camarón",
        flavors: &[],
    },
    Specialty {
        id: "mexicana",
        name: "Mexicana",
        price: 180,
        description: "Chorizo, Cebolla, Morrón y Jalapeño",
        flavors: &[],
    },
    Specialty {
        id: "marinera",
        name: "Marinera",
        price: 180,
        description: "Camarón, Atún, Cebolla y Aceituna",
        flavors: &[],
    },
    Specialty {
        id: "carnes-frias",
        name: "Carnes Frías",
        price: 180,
        description: "Jamón, Peperoni, Salami y Salchicha",
        flavors: &[],
    },
    Specialty {
        id: "cuatro-estaciones",
        name: "Cuatro Estaciones",
        price: 210,
        description: "Combinación de Margarita, Hawaiana, Vegetariana y Meat",
        flavors: &[],
    },
    Specialty {
        id: "boneless-pizza",
        name: "Pizza Boneless",
        price: 180,
        description: "Pizza con boneless crujientes - Elige tu sabor favorito",
        flavors: BONELESS_FLAVORS,
    },
];

pub const SNACKS: &[Snack] = &[
    Snack {
        id: "boneless",
        name: "Boneless",
        price: 100,
        unit: "orden",
        description: "Alitas deshuesadas crujientes con aderezo ranch",
        flavors: BONELESS_FLAVORS,
    },
    Snack {
        id: "papas-francesas",
        name: "Papas a la Francesa",
        price: 40,
        unit: "250gr",
        description: "Papas doradas y crujientes",
        flavors: &[],
    },
];

pub fn ingredient(id: &str) -> Option<&'static Ingredient> {
    INGREDIENTS.iter().find(|i| i.id == id)
}

pub fn specialty(id: &str) -> Option<&'static Specialty> {
    SPECIALTIES.iter().find(|s| s.id == id)
}

pub fn snack(id: &str) -> Option<&'static Snack> {
    SNACKS.iter().find(|s| s.id == id)
}
