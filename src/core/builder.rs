use rust_decimal::Decimal;

use super::error::PacklistError;
use super::types::*;

/// Builder for a line item.
///
/// ```
/// use packlist::core::*;
/// use rust_decimal_macros::dec;
///
/// let item = LineItemBuilder::new("Industrial Valves - DN50, PN16", dec!(10), "PCS", dec!(150.00))
///     .tax(IgstRate::Eighteen)
///     .packages(1, 1)
///     .build();
/// assert_eq!(item.width(), Some(1));
/// ```
pub struct LineItemBuilder {
    id: String,
    description: String,
    quantity: Decimal,
    unit: String,
    rate: Decimal,
    tax_rate: IgstRate,
    package_from: Option<u32>,
    package_to: Option<u32>,
}

impl LineItemBuilder {
    pub fn new(
        description: impl Into<String>,
        quantity: Decimal,
        unit: impl Into<String>,
        rate: Decimal,
    ) -> Self {
        Self {
            id: String::new(),
            description: description.into(),
            quantity,
            unit: unit.into(),
            rate,
            tax_rate: IgstRate::Zero,
            package_from: None,
            package_to: None,
        }
    }

    /// An empty row, as the form creates it.
    pub fn blank() -> Self {
        Self::new("", Decimal::ZERO, "", Decimal::ZERO)
    }

    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn tax(mut self, rate: IgstRate) -> Self {
        self.tax_rate = rate;
        self
    }

    /// Stored package range. Not checked here; the sequencer repairs it.
    pub fn packages(mut self, from: u32, to: u32) -> Self {
        self.package_from = Some(from);
        self.package_to = Some(to);
        self
    }

    pub fn build(self) -> LineItem {
        LineItem {
            id: self.id,
            package_from: self.package_from,
            package_to: self.package_to,
            description: self.description,
            unit: self.unit,
            quantity: self.quantity,
            rate: self.rate,
            tax_rate: self.tax_rate,
            amount: Decimal::ZERO,
            taxable_value: Decimal::ZERO,
            tax_amount: Decimal::ZERO,
        }
    }
}

/// Builder for the invoice header.
///
/// ```
/// use packlist::core::*;
///
/// let header = ExportHeaderBuilder::new("ZC/2024-25/001", "2024-06-15")
///     .currency("USD")
///     .port_of_loading("Nhava Sheva")
///     .final_destination("Hamburg")
///     .build()
///     .unwrap();
/// assert_eq!(header.currency, "USD");
/// ```
pub struct ExportHeaderBuilder {
    header: ExportHeader,
}

macro_rules! header_setters {
    ($($field:ident),* $(,)?) => {
        $(
            pub fn $field(mut self, value: impl Into<String>) -> Self {
                self.header.$field = value.into();
                self
            }
        )*
    };
}

impl ExportHeaderBuilder {
    pub fn new(invoice_number: impl Into<String>, invoice_date: impl Into<String>) -> Self {
        Self {
            header: ExportHeader {
                invoice_number: invoice_number.into(),
                invoice_date: invoice_date.into(),
                ..Default::default()
            },
        }
    }

    header_setters!(
        buyer_order_number,
        buyer_order_date,
        exporter_reference,
        iec_number,
        tax_registration_number,
        lut_arn_number,
        delivery_payment_terms,
        port_of_loading,
        port_of_discharge,
        pre_carriage_by,
        place_of_receipt,
        port_of_destination,
        destination,
        currency,
        vessel_flight,
        country_of_origin,
        ad_code,
        other_reference,
        hs_code,
        final_destination,
        contact_person_name,
        contact_email,
        consignee_address,
        delivery_address,
    );

    /// Build the header. Only the invoice number is mandatory here; the
    /// remaining checks run in [`validate_submission`](super::validate_submission).
    pub fn build(self) -> Result<ExportHeader, PacklistError> {
        if self.header.invoice_number.trim().is_empty() {
            return Err(PacklistError::Builder("invoice number is required".into()));
        }
        if self.header.invoice_number.len() > 200 {
            return Err(PacklistError::Builder(
                "invoice number cannot exceed 200 characters".into(),
            ));
        }
        Ok(self.header)
    }
}
