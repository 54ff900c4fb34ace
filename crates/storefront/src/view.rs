//! Presentational view state: which popup is open and whether the cart
//! panel is showing.
//!
//! This state never feeds back into [`SessionCartStore`]; front ends read it
//! alongside the store to decide what to draw.
//!
//! [`SessionCartStore`]: crate::store::SessionCartStore

use fresh_farm_core::Product;

/// The single popup slot.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PopupState {
    #[default]
    Closed,
    /// Product detail with an "add to cart" action.
    ProductDetail(Product),
    /// Phone / OTP sign-in form.
    AuthFlow,
}

impl PopupState {
    #[must_use]
    pub const fn is_open(&self) -> bool {
        !matches!(self, Self::Closed)
    }

    /// The product shown, if the product popup is open.
    #[must_use]
    pub const fn product(&self) -> Option<&Product> {
        match self {
            Self::ProductDetail(product) => Some(product),
            Self::Closed | Self::AuthFlow => None,
        }
    }
}

/// Popup plus cart panel visibility.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ViewState {
    pub popup: PopupState,
    pub cart_open: bool,
}

impl ViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a product's detail popup, replacing any open popup.
    pub fn open_product(&mut self, product: Product) {
        self.popup = PopupState::ProductDetail(product);
    }

    /// Show the sign-in popup, replacing any open popup.
    pub fn open_auth(&mut self) {
        self.popup = PopupState::AuthFlow;
    }

    pub fn close_popup(&mut self) {
        self.popup = PopupState::Closed;
    }

    pub const fn open_cart(&mut self) {
        self.cart_open = true;
    }

    pub const fn close_cart(&mut self) {
        self.cart_open = false;
    }
}
