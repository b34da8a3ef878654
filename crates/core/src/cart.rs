//! Cart
//!
//! A cart is an ordered list of product lines mutated only through
//! [`CartAction`]s. There is at most one line per product: adding a product
//! that is already present bumps its quantity instead of appending.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use thiserror::Error;
use uuid::Uuid;

/// Inline capacity for cart lines before spilling to the heap.
const INLINE_LINES: usize = 8;

/// Errors raised while applying cart actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CartError {
    /// Incrementing a line would overflow its quantity.
    #[error("quantity for product {0} would overflow")]
    QuantityOverflow(Uuid),
}

/// A single cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    /// Product referenced by the line.
    pub product: Uuid,

    /// Number of units, always at least one.
    pub quantity: u32,
}

/// Named cart mutations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CartAction {
    /// Add one unit of a product.
    AddItem {
        /// Product to add.
        product: Uuid,
    },

    /// Drop a product's line entirely.
    RemoveItem {
        /// Product to remove.
        product: Uuid,
    },

    /// Set a product's quantity; zero removes the line.
    UpdateQuantity {
        /// Product to update.
        product: Uuid,

        /// New quantity.
        quantity: u32,
    },

    /// Empty the cart.
    Clear,
}

/// Cart
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: SmallVec<[CartLine; INLINE_LINES]>,
}

impl Cart {
    /// Create an empty cart.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a cart from stored lines.
    ///
    /// Duplicate products are collapsed into the first occurrence and
    /// zero-quantity lines are dropped, so the result holds the same
    /// invariants as a cart built through actions.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityOverflow`] if collapsing duplicates
    /// overflows a quantity.
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Result<Self, CartError> {
        let mut cart = Self::new();

        for line in lines {
            if line.quantity == 0 {
                continue;
            }

            match cart.position(line.product) {
                Some(index) => {
                    if let Some(existing) = cart.lines.get_mut(index) {
                        existing.quantity = existing
                            .quantity
                            .checked_add(line.quantity)
                            .ok_or(CartError::QuantityOverflow(line.product))?;
                    }
                }
                None => cart.lines.push(line),
            }
        }

        Ok(cart)
    }

    /// Apply an action in place.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::QuantityOverflow`] when adding to a line already
    /// at `u32::MAX`. The cart is left unchanged in that case.
    pub fn apply(&mut self, action: CartAction) -> Result<(), CartError> {
        match action {
            CartAction::AddItem { product } => self.add(product),
            CartAction::RemoveItem { product } => {
                self.lines.retain(|line| line.product != product);

                Ok(())
            }
            CartAction::UpdateQuantity { product, quantity } => {
                if quantity == 0 {
                    self.lines.retain(|line| line.product != product);
                } else if let Some(line) = self.line_mut(product) {
                    line.quantity = quantity;
                }

                Ok(())
            }
            CartAction::Clear => {
                self.lines.clear();

                Ok(())
            }
        }
    }

    /// Consume the cart and return it with `action` applied.
    ///
    /// # Errors
    ///
    /// See [`Cart::apply`].
    pub fn reduce(mut self, action: CartAction) -> Result<Self, CartError> {
        self.apply(action)?;

        Ok(self)
    }

    /// Lines in insertion order.
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Number of distinct product lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the cart has no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.quantity)).sum()
    }

    /// Quantity held for `product`, zero when absent.
    pub fn quantity_of(&self, product: Uuid) -> u32 {
        self.lines
            .iter()
            .find(|line| line.product == product)
            .map_or(0, |line| line.quantity)
    }

    fn add(&mut self, product: Uuid) -> Result<(), CartError> {
        if let Some(line) = self.line_mut(product) {
            line.quantity = line
                .quantity
                .checked_add(1)
                .ok_or(CartError::QuantityOverflow(product))?;

            return Ok(());
        }

        self.lines.push(CartLine {
            product,
            quantity: 1,
        });

        Ok(())
    }

    fn position(&self, product: Uuid) -> Option<usize> {
        self.lines.iter().position(|line| line.product == product)
    }

    fn line_mut(&mut self, product: Uuid) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.product == product)
    }
}

impl IntoIterator for Cart {
    type Item = CartLine;
    type IntoIter = smallvec::IntoIter<[CartLine; INLINE_LINES]>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.into_iter()
    }
}
