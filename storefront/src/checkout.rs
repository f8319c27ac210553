//! Checkout flow: form validation, order assembly and the outbound
//! WhatsApp handoff
//!
//! The summarizer renders the plain-text order message the store
//! receives; its exact wording and line layout is the interchange
//! format with the kitchen, so tests pin it down literally.

use chrono::DateTime;
use chrono_tz::Tz;

use shared::models::{Cart, Fulfillment, OrderRecord, PaymentMethod};
use shared::util::order_number;
use shared::{StoreError, StoreResult};

use crate::config::StoreConfig;

/// One checkout attempt
///
/// The order number is generated once when the session starts and
/// stays stable across form edits and re-validation.
#[derive(Debug, Clone)]
pub struct CheckoutSession {
    order_number: String,
}

impl CheckoutSession {
    pub fn new() -> Self {
        Self {
            order_number: order_number(),
        }
    }

    pub fn order_number(&self) -> &str {
        &self.order_number
    }
}

impl Default for CheckoutSession {
    fn default() -> Self {
        Self::new()
    }
}

/// Customer-entered checkout fields
#[derive(Debug, Clone, Default)]
pub struct CheckoutForm {
    pub customer_name: String,
    pub phone: String,
    pub delivery: bool,
    /// Delivery address, ignored for pickup
    pub address: String,
    pub payment: PaymentMethod,
}

impl CheckoutForm {
    /// Validate the form and assemble the order record
    pub fn build_order(
        &self,
        session: &CheckoutSession,
        cart: &Cart,
        config: &StoreConfig,
    ) -> StoreResult<OrderRecord> {
        let customer_name = self.customer_name.trim();
        if customer_name.is_empty() {
            return Err(StoreError::validation("Por favor ingresa tu nombre"));
        }
        if cart.is_empty() {
            return Err(StoreError::validation("Tu carrito está vacío"));
        }

        let fulfillment = if self.delivery {
            let address = self.address.trim();
            if address.is_empty() {
                return Err(StoreError::validation(
                    "La dirección es obligatoria para pedidos a domicilio",
                ));
            }
            Fulfillment::Delivery {
                address: address.to_string(),
            }
        } else {
            Fulfillment::Pickup
        };

        let phone = match self.phone.trim() {
            "" => None,
            p => Some(p.to_string()),
        };

        let subtotal = cart.total_price();
        let delivery_fee = if fulfillment.is_delivery() {
            config.delivery_fee
        } else {
            0
        };

        Ok(OrderRecord {
            order_number: session.order_number().to_string(),
            customer_name: customer_name.to_string(),
            phone,
            fulfillment,
            payment: self.payment,
            items: cart.items.clone(),
            subtotal,
            delivery_fee,
            total: subtotal + delivery_fee,
        })
    }
}

/// Render the outbound order message
pub fn summarize(order: &OrderRecord, config: &StoreConfig, now: DateTime<Tz>) -> String {
    let mut message = format!("*🍕 PEDIDO {}*\n\n", config.store_name.to_uppercase());

    // Cliente
    message.push_str("👤 *Cliente*\n");
    message.push_str(&format!("Nombre: {}\n", order.customer_name));
    if let Some(phone) = &order.phone {
        message.push_str(&format!("Teléfono: {phone}\n"));
    }
    message.push_str(&format!("Hora: {}\n", now.format("%H:%M")));
    message.push_str(&format!("Pedido #{}\n\n", order.order_number));

    // Entrega
    match &order.fulfillment {
        Fulfillment::Delivery { address } => {
            message.push_str("🚚 *Entrega a domicilio*\n");
            message.push_str(&format!("Dirección: {address}\n\n"));
        }
        Fulfillment::Pickup => {
            message.push_str("🏪 *Recoger en tienda*\n");
            message.push_str(&format!("Dirección: {}\n\n", config.pickup_address));
        }
    }

    // Pedido
    message.push_str("📋 *Pedido*\n");
    for item in &order.items {
        message.push_str(&format!("• {}: {}", item.kind.summary_tag(), item.name));
        if let Some(details) = &item.details {
            message.push_str(&format!(" - {details}"));
        }
        message.push_str(&format!(
            " ({}x) - ${}\n",
            item.quantity,
            item.line_total()
        ));
    }

    // Resumen
    message.push_str("\n💵 *Resumen*\n");
    message.push_str(&format!("Subtotal: ${} MXN\n", order.subtotal));
    if order.delivery_fee > 0 {
        message.push_str(&format!("Costo de entrega: ${} MXN\n", order.delivery_fee));
    }
    message.push_str(&format!("*Total: ${} MXN*\n", order.total));
    message.push_str(&format!("Forma de pago: {}\n", order.payment.summary_label()));

    if order.payment == PaymentMethod::BankTransfer {
        message.push_str("\n*💳 DATOS PARA TRANSFERENCIA:*\n");
        message.push_str(&format!("Banco: {}\n", config.bank.bank));
        message.push_str(&format!("Nombre: {}\n", config.bank.holder));
        message.push_str(&format!("CLABE: {}\n", config.bank.clabe));
        message.push_str(&format!("Concepto: Pedido {}\n", order.order_number));
    }

    message.push_str("\n¡Gracias por tu pedido! 🍕");
    message
}

/// wa.me deep link carrying the rendered message
pub fn whatsapp_url(message: &str, config: &StoreConfig) -> String {
    format!(
        "https://wa.me/{}?text={}",
        config.whatsapp_number,
        urlencoding::encode(message)
    )
}
