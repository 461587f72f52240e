use crate::types::{
    Order, OrderLineItem, OrderPayload, PayloadBilling, PayloadLineItem, PayloadShipping,
};

/// Prefix and suffix wrapped around the shop's order number.
#[derive(Debug, Clone, Default)]
pub struct OrderNumberFormat {
    pub prefix: String,
    pub suffix: String,
}

impl OrderNumberFormat {
    pub fn apply(&self, order_number: &str) -> String {
        let mut formatted =
            String::with_capacity(self.prefix.len() + order_number.len() + self.suffix.len());
        formatted.push_str(&self.prefix);
        formatted.push_str(order_number);
        formatted.push_str(&self.suffix);
        formatted
    }
}

pub fn build_payload(order: &Order, format: &OrderNumberFormat) -> OrderPayload {
    let billing = &order.billing;
    let shipping = &order.shipping;

    OrderPayload {
        order_number: format.apply(&order.order_number),
        customer_name: format!("{} {}", billing.first_name, billing.last_name),
        customer_email: order.billing_email.clone(),
        customer_phone: order.billing_phone.clone(),
        shipping_method: order.shipping_method.clone(),
        payment_method: order.payment_method_title.clone(),
        customer_note: order.customer_note.clone(),
        line_items: order.line_items.iter().map(project_line_item).collect(),
        shipping_price: order.shipping_total.clone(),
        billing: PayloadBilling {
            first_name: billing.first_name.clone(),
            last_name: billing.last_name.clone(),
            company: billing.company.clone(),
            address_1: billing.address_1.clone(),
            address_2: billing.address_2.clone(),
            city: billing.city.clone(),
            state: billing.state.clone(),
            postcode: billing.postcode.clone(),
            country: billing.country.clone(),
            email: order.billing_email.clone(),
            phone: order.billing_phone.clone(),
        },
        shipping: PayloadShipping {
            first_name: shipping.first_name.clone(),
            last_name: shipping.last_name.clone(),
            company: shipping.company.clone(),
            address_1: shipping.address_1.clone(),
            address_2: shipping.address_2.clone(),
            city: shipping.city.clone(),
            state: shipping.state.clone(),
            postcode: shipping.postcode.clone(),
            country: shipping.country.clone(),
        },
    }
}

fn project_line_item(item: &OrderLineItem) -> PayloadLineItem {
    PayloadLineItem {
        product_id: item.product_id,
        sku: item.sku.clone(),
        quantity: item.quantity,
        price: item.total.clone(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::types::OrderAddress;

    fn line_item(id: i64, product_id: i64, sku: &str, quantity: i64, total: &str) -> OrderLineItem {
        OrderLineItem {
            id,
            product_id,
            variation_id: 0,
            name: format!("Product {sku}"),
            sku: sku.to_string(),
            quantity,
            subtotal: total.to_string(),
            total: total.to_string(),
        }
    }

    fn sample_order() -> Order {
        Order {
            id: 42,
            order_number: "1042".to_string(),
            billing: OrderAddress {
                first_name: "Ada".to_string(),
                last_name: "Lovelace".to_string(),
                company: String::new(),
                address_1: "12 Analytical Row".to_string(),
                address_2: String::new(),
                city: "London".to_string(),
                state: String::new(),
                postcode: "N1 9GU".to_string(),
                country: "GB".to_string(),
            },
            billing_email: "ada@example.com".to_string(),
            billing_phone: "+44 20 7946 0000".to_string(),
            shipping: OrderAddress::default(),
            shipping_method: "Flat rate".to_string(),
            payment_method_title: "Direct bank transfer".to_string(),
            customer_note: "Leave at the door".to_string(),
            shipping_total: "4.95".to_string(),
            line_items: vec![
                line_item(1, 101, "A", 1, "10.00"),
                line_item(2, 102, "B", 2, "5.00"),
            ],
        }
    }

    fn pre_suf() -> OrderNumberFormat {
        OrderNumberFormat {
            prefix: "PRE".to_string(),
            suffix: "SUF".to_string(),
        }
    }

    #[test]
    fn order_number_is_wrapped_in_prefix_and_suffix() {
        let payload = build_payload(&sample_order(), &pre_suf());
        assert_eq!(payload.order_number, "PRE1042SUF");
    }

    #[test]
    fn empty_format_leaves_order_number_untouched() {
        let payload = build_payload(&sample_order(), &OrderNumberFormat::default());
        assert_eq!(payload.order_number, "1042");
    }

    #[test]
    fn customer_fields_come_from_billing() {
        let payload = build_payload(&sample_order(), &pre_suf());
        assert_eq!(payload.customer_name, "Ada Lovelace");
        assert_eq!(payload.customer_email, "ada@example.com");
        assert_eq!(payload.customer_phone, "+44 20 7946 0000");
        assert_eq!(payload.payment_method, "Direct bank transfer");
        assert_eq!(payload.shipping_price, "4.95");
    }

    #[test]
    fn customer_name_keeps_separator_when_parts_are_missing() {
        let mut order = sample_order();
        order.billing.last_name.clear();
        let payload = build_payload(&order, &pre_suf());
        assert_eq!(payload.customer_name, "Ada ");
    }

    #[test]
    fn line_items_are_projected_in_order() {
        let payload = build_payload(&sample_order(), &pre_suf());
        assert_eq!(
            payload.line_items,
            vec![
                PayloadLineItem {
                    product_id: 101,
                    sku: "A".to_string(),
                    quantity: 1,
                    price: "10.00".to_string(),
                },
                PayloadLineItem {
                    product_id: 102,
                    sku: "B".to_string(),
                    quantity: 2,
                    price: "5.00".to_string(),
                },
            ]
        );
    }

    #[test]
    fn address_objects_serialize_every_field_even_when_empty() {
        let payload = build_payload(&sample_order(), &pre_suf());
        let json = serde_json::to_value(&payload).unwrap();

        let billing = json["billing"].as_object().unwrap();
        for key in [
            "first_name",
            "last_name",
            "company",
            "address_1",
            "address_2",
            "city",
            "state",
            "postcode",
            "country",
            "email",
            "phone",
        ] {
            assert!(billing.contains_key(key), "billing missing {key}");
        }
        assert_eq!(billing["company"], "");

        let shipping = json["shipping"].as_object().unwrap();
        assert_eq!(shipping.len(), 9);
        assert!(!shipping.contains_key("email"));
        assert!(!shipping.contains_key("phone"));
        assert!(shipping.values().all(|value| value == ""));
    }
}
