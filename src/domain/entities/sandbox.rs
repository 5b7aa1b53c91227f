//! # Sandbox Entities
//!
//! Ephemeral records created solely so carrier rate logic has something
//! realistic to price against.
//!
//! A [`SandboxAddress`] stands in for the buyer's shipping address and a
//! [`SandboxLineSet`] for their priced order lines. Both are created fresh
//! per request with random identifiers, are tracked only by the request's own
//! [`SandboxContext`], and are deleted before the caller ever observes a
//! result. Line sets reference the address one-directionally (`ships_to`),
//! which fixes the reclamation order: lines first, address second.

use crate::domain::value_objects::{
    AddressId, CountryCode, LineSetId, PostalCode, Price, ProductId, Quantity, RequestId,
    Timestamp,
};
use serde::{Deserialize, Serialize};

/// Placeholder street written into every sandbox address.
///
/// Carriers rate by postal code and country; the street and city fields only
/// need to be structurally present.
pub const PLACEHOLDER_STREET: &str = "Shipping quote placeholder";

/// Placeholder city written into every sandbox address.
pub const PLACEHOLDER_CITY: &str = "-";

/// An ephemeral shipping address owned by exactly one quote request.
///
/// # Invariants
///
/// - `hidden` is always true: a sandbox address must never surface in
///   address listings even if reclamation is delayed
/// - Never reused or shared across requests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SandboxAddress {
    id: AddressId,
    postal_code: PostalCode,
    country: CountryCode,
    city: String,
    street: String,
    hidden: bool,
    created_at: Timestamp,
}

impl SandboxAddress {
    /// Creates a fresh sandbox address for a postal code and country.
    #[must_use]
    pub fn new(postal_code: PostalCode, country: CountryCode) -> Self {
        Self {
            id: AddressId::new_v4(),
            postal_code,
            country,
            city: PLACEHOLDER_CITY.to_string(),
            street: PLACEHOLDER_STREET.to_string(),
            hidden: true,
            created_at: Timestamp::now(),
        }
    }

    /// Returns the address identifier.
    #[must_use]
    pub fn id(&self) -> AddressId {
        self.id
    }

    /// Returns the destination postal code.
    #[must_use]
    pub fn postal_code(&self) -> &PostalCode {
        &self.postal_code
    }

    /// Returns the destination country.
    #[must_use]
    pub fn country(&self) -> &CountryCode {
        &self.country
    }

    /// Returns the placeholder city.
    #[must_use]
    pub fn city(&self) -> &str {
        &self.city
    }

    /// Returns the placeholder street.
    #[must_use]
    pub fn street(&self) -> &str {
        &self.street
    }

    /// Always true for sandbox addresses.
    #[must_use]
    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Returns when the address was created.
    #[must_use]
    pub fn created_at(&self) -> Timestamp {
        self.created_at
    }
}

/// One priced line inside a [`SandboxLineSet`].
///
/// Copied field-by-field from a real cart line or synthesized from a single
/// product; never a reference into the caller's cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SandboxLine {
    product_ref: ProductId,
    quantity: Quantity,
    unit_price: Price,
}

impl SandboxLine {
    /// Creates a sandbox line.
    #[must_use]
    pub fn new(product_ref: ProductId, quantity: Quantity, unit_price: Price) -> Self {
        Self {
            product_ref,
            quantity,
            unit_price,
        }
    }

    /// Returns the product reference.
    #[must_use]
    pub fn product_ref(&self) -> &ProductId {
        &self.product_ref
    }

    /// Returns the line quantity.
    #[must_use]
    pub fn quantity(&self) -> Quantity {
        self.quantity
    }

    /// Returns the unit price.
    #[must_use]
    pub fn unit_price(&self) -> Price {
        self.unit_price
    }

    /// Returns `unit_price * quantity`, saturating on overflow.
    #[must_use]
    pub fn subtotal(&self) -> Price {
        self.unit_price
            .checked_mul_qty(self.quantity.get())
            .unwrap_or(self.unit_price)
    }
}

/// An ephemeral set of priced lines shipping to one sandbox address.
///
/// # Invariants
///
/// - Owns its lines; never aliases the caller's cart
/// - `ships_to` points at the request's own [`SandboxAddress`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SandboxLineSet {
    id: LineSetId,
    ships_to: AddressId,
    lines: Vec<SandboxLine>,
    created_at: Timestamp,
}

impl SandboxLineSet {
    /// Creates a line set shipping to the given sandbox address.
    #[must_use]
    pub fn new(ships_to: AddressId, lines: Vec<SandboxLine>) -> Self {
        Self {
            id: LineSetId::new_v4(),
            ships_to,
            lines,
            created_at: Timestamp::now(),
        }
    }

    /// Returns the line set identifier.
    #[must_use]
    pub fn id(&self) -> LineSetId {
        self.id
    }

    /// Returns the sandbox address this set ships to.
    #[must_use]
    pub fn ships_to(&self) -> AddressId {
        self.ships_to
    }

    /// Returns the lines.
    #[must_use]
    pub fn lines(&self) -> &[SandboxLine] {
        &self.lines
    }

    /// Returns the number of lines.
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Returns true if the set has no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    #[must_use]
    pub fn total_units(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.quantity().get())).sum()
    }

    /// Sum of line subtotals, saturating on overflow.
    #[must_use]
    pub fn total_value(&self) -> Price {
        let total = self
            .lines
            .iter()
            .fold(rust_decimal::Decimal::ZERO, |acc, l| {
                acc.checked_add(l.subtotal().get()).unwrap_or(acc)
            });
        Price::new(total).unwrap_or_else(|_| Price::zero())
    }
}

/// Per-request tracker for every sandbox entity that was created.
///
/// The context is built incrementally (address first, then line set) so that
/// a failure mid-build still leaves an accurate record of what must be
/// reclaimed. The `reclaimed` flag makes reclamation idempotent.
#[derive(Debug, Clone)]
pub struct SandboxContext {
    request_id: RequestId,
    address: Option<SandboxAddress>,
    line_set: Option<SandboxLineSet>,
    reclaimed: bool,
}

impl SandboxContext {
    /// Creates an empty context for one request.
    #[must_use]
    pub fn new(request_id: RequestId) -> Self {
        Self {
            request_id,
            address: None,
            line_set: None,
            reclaimed: false,
        }
    }

    /// Returns the owning request's identifier.
    #[must_use]
    pub fn request_id(&self) -> RequestId {
        self.request_id
    }

    /// Records the sandbox address.
    pub fn attach_address(&mut self, address: SandboxAddress) {
        self.address = Some(address);
    }

    /// Records the sandbox line set.
    pub fn attach_line_set(&mut self, line_set: SandboxLineSet) {
        self.line_set = Some(line_set);
    }

    /// Returns the sandbox address, if built.
    #[must_use]
    pub fn address(&self) -> Option<&SandboxAddress> {
        self.address.as_ref()
    }

    /// Returns the sandbox line set, if built.
    #[must_use]
    pub fn line_set(&self) -> Option<&SandboxLineSet> {
        self.line_set.as_ref()
    }

    /// Returns true once [`Self::take_for_reclaim`] has run.
    #[must_use]
    pub fn is_reclaimed(&self) -> bool {
        self.reclaimed
    }

    /// Takes the tracked entities for deletion and marks the context
    /// reclaimed. Returns `(line_set, address)` in the order they must be
    /// deleted. A second call yields `(None, None)`.
    pub fn take_for_reclaim(&mut self) -> (Option<SandboxLineSet>, Option<SandboxAddress>) {
        self.reclaimed = true;
        (self.line_set.take(), self.address.take())
    }
}
