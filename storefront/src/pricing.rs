//! Pricing engine
//!
//! Tier pricing for the build-your-own pizza plus the constructors
//! that turn catalog products into cart line items. All prices are
//! integer MXN.

use shared::models::{CartLineItem, ItemKind};
use shared::{StoreError, StoreResult};

use crate::catalog::{self, Flavor, Ingredient};

/// Weighted ingredient cap for the build-your-own pizza
pub const MAX_WEIGHT: u32 = 6;

// ========== Tier pricing ==========

/// Price for a build-your-own pizza with the given ingredient weight
///
/// 0-2 → 150, 3-4 → 180, 5+ → 210 (MXN)
pub fn tier_price(weight: u32) -> i64 {
    match weight {
        0..=2 => 150,
        3..=4 => 180,
        _ => 210,
    }
}

// ========== Build-your-own pizza ==========

/// Incremental ingredient selection for the build-your-own pizza
///
/// Toggling an already-selected ingredient removes it; adding one that
/// would push the weighted total past [`MAX_WEIGHT`] is rejected and
/// leaves the selection untouched.
#[derive(Debug, Default)]
pub struct PizzaBuilder {
    selected: Vec<&'static Ingredient>,
}

impl PizzaBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or remove an ingredient by id
    pub fn toggle(&mut self, id: &str) -> StoreResult<()> {
        if let Some(pos) = self.selected.iter().position(|i| i.id == id) {
            self.selected.remove(pos);
            return Ok(());
        }

        let ingredient = catalog::ingredient(id)
            .ok_or_else(|| StoreError::validation(format!("Ingrediente desconocido: {id}")))?;

        if self.weight() + ingredient.weight() > MAX_WEIGHT {
            return Err(StoreError::validation(
                "Máximo 6 ingredientes permitidos",
            ));
        }

        self.selected.push(ingredient);
        Ok(())
    }

    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.iter().any(|i| i.id == id)
    }

    /// Weighted ingredient count (camarón counts as 2)
    pub fn weight(&self) -> u32 {
        self.selected.iter().map(|i| i.weight()).sum()
    }

    pub fn price(&self) -> i64 {
        tier_price(self.weight())
    }

    pub fn reset(&mut self) {
        self.selected.clear();
    }

    /// Produce the cart line item for the current selection
    pub fn build_item(&self) -> StoreResult<CartLineItem> {
        if self.selected.is_empty() {
            return Err(StoreError::validation("Selecciona al menos un ingrediente"));
        }

        let names: Vec<&str> = self.selected.iter().map(|i| i.name).collect();
        Ok(CartLineItem {
            kind: ItemKind::Custom,
            product_id: "custom-pizza".to_string(),
            name: "Pizza por Ingredientes".to_string(),
            unit_price: self.price(),
            quantity: 1,
            details: Some(format!(
                "{} ingredientes: {}",
                self.weight(),
                names.join(", ")
            )),
        })
    }
}

// ========== Specialties ==========

/// Cart line item for a specialty pizza
///
/// A flavor is mandatory exactly when the specialty declares flavors
/// (the boneless pizza).
pub fn specialty_item(id: &str, flavor: Option<&str>) -> StoreResult<CartLineItem> {
    let specialty = catalog::specialty(id)
        .ok_or_else(|| StoreError::validation(format!("Especialidad desconocida: {id}")))?;

    let details = if specialty.flavors.is_empty() {
        specialty.description.to_string()
    } else {
        let flavor = resolve_flavor(specialty.flavors, flavor, "Selecciona un sabor")?;
        format!("{} - Sabor {}", specialty.description, flavor.name)
    };

    Ok(CartLineItem {
        kind: ItemKind::Specialty,
        product_id: specialty.id.to_string(),
        name: specialty.name.to_string(),
        unit_price: specialty.price,
        quantity: 1,
        details: Some(details),
    })
}

// ========== Snacks ==========

/// Cart line item for a snack at the given order quantity
///
/// Snack quantity is folded into the unit price and the detail line
/// ("2 ordenes"), so the cart line itself always carries quantity 1
/// and snack lines with different quantities never merge.
pub fn snack_item(id: &str, flavor: Option<&str>, quantity: u32) -> StoreResult<CartLineItem> {
    let snack = catalog::snack(id)
        .ok_or_else(|| StoreError::validation(format!("Antojito desconocido: {id}")))?;
    if quantity == 0 {
        return Err(StoreError::validation("La cantidad debe ser mayor a cero"));
    }

    // Only "orden" pluralizes; measure units ("250gr") stay as-is
    let unit = if quantity > 1 && snack.unit == "orden" {
        format!("{}es", snack.unit)
    } else {
        snack.unit.to_string()
    };
    let mut details = format!("{quantity} {unit}");

    if !snack.flavors.is_empty() {
        let flavor = resolve_flavor(
            snack.flavors,
            flavor,
            "Selecciona un sabor para los boneless",
        )?;
        details.push_str(&format!(
            " - Sabor {} - Incluye aderezo ranch",
            flavor.name
        ));
    }

    // boneless orders keep their own kind; both render as ANTOJITO
    let kind = if snack.flavors.is_empty() {
        ItemKind::Snack
    } else {
        ItemKind::Boneless
    };

    Ok(CartLineItem {
        kind,
        product_id: snack.id.to_string(),
        name: snack.name.to_string(),
        unit_price: snack.price * quantity as i64,
        quantity: 1,
        details: Some(details),
    })
}

fn resolve_flavor<'a>(
    flavors: &'a [Flavor],
    chosen: Option<&str>,
    missing_message: &str,
) -> StoreResult<&'a Flavor> {
    let id = chosen.ok_or_else(|| StoreError::validation(missing_message))?;
    flavors
        .iter()
        .find(|f| f.id == id)
        .ok_or_else(|| StoreError::validation(format!("Sabor desconocido: {id}")))
}
