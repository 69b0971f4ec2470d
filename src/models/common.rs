use serde::{Deserialize, Serialize};
use std::fmt;

/// Declares a wire-code enum that serializes to its exact string and
/// displays the same way, so it can be used both in bodies and URL paths.
macro_rules! wire_code {
    ($(#[$meta:meta])* $name:ident { $($variant:ident => $code:literal),+ $(,)? }) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }
    };
}

wire_code!(TransactionType {
    Collection => "COLLECTION",
    Payout => "PAYOUT",
    Refund => "REFUND",
});

wire_code!(TransactionStatus {
    Pending => "PENDING",
    Failed => "FAILED",
    Completed => "COMPLETED",
    Cancelled => "CANCELLED",
});

wire_code!(TransactionMethod {
    MobileMoney => "MOBILE_MONEY",
    Card => "CARD",
    Bank => "BANK",
    Crypto => "CRYPTO",
});

wire_code!(CountryCode {
    Uganda => "UG",
    Kenya => "KE",
    Tanzania => "TZ",
    Rwanda => "RW",
    Burundi => "BI",
    Ghana => "GH",
    Cameroon => "CM",
    SouthAfrica => "ZA",
    Nigeria => "NG",
    Zambia => "ZM",
    Usa => "US",
    UnitedKingdom => "GB",
    Europe => "EU",
});

wire_code!(CurrencyCode {
    Ugx => "UGX",
    Kes => "KES",
    Tzs => "TZS",
    Rwf => "RWF",
    Bif => "BIF",
    Ghs => "GHS",
    Xaf => "XAF",
    Zar => "ZAR",
    Ngn => "NGN",
    Zmw => "ZMW",
    Usd => "USD",
    Gbp => "GBP",
    Eur => "EUR",
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_serialize_to_wire_strings() {
        assert_eq!(
            serde_json::to_string(&TransactionMethod::MobileMoney).unwrap(),
            r#""MOBILE_MONEY""#
        );
        assert_eq!(
            serde_json::from_str::<CurrencyCode>(r#""UGX""#).unwrap(),
            CurrencyCode::Ugx
        );
        assert_eq!(
            serde_json::from_str::<TransactionStatus>(r#""COMPLETED""#).unwrap(),
            TransactionStatus::Completed
        );
    }

    #[test]
    fn display_matches_wire_string() {
        assert_eq!(CountryCode::Kenya.to_string(), "KE");
        assert_eq!(TransactionType::Collection.to_string(), "COLLECTION");
        assert_eq!(CurrencyCode::Eur.as_str(), "EUR");
    }
}
