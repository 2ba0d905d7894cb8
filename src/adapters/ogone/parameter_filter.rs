//! Direction-specific signing whitelists.
//!
//! Only whitelisted parameters participate in a digest. For outgoing
//! requests the whitelist is the supported field table itself; for
//! incoming feedback it is the gateway's published list of signed
//! feedback parameters.

use std::collections::HashSet;

use once_cell::sync::Lazy;

use crate::domain::payment::RequestField;
use crate::ports::ParameterFilter;

/// Feedback parameters included in the SHA-OUT digest, per the gateway's
/// e-Commerce integration guide.
const SHA_OUT_PARAMETERS: &[&str] = &[
    "AAVADDRESS",
    "AAVCHECK",
    "AAVMAIL",
    "AAVNAME",
    "AAVPHONE",
    "AAVZIP",
    "ACCEPTANCE",
    "ALIAS",
    "AMOUNT",
    "BIC",
    "BIN",
    "BRAND",
    "CARDNO",
    "CCCTY",
    "CN",
    "COLLECTOR_BIC",
    "COLLECTOR_IBAN",
    "COMPLUS",
    "CREATION_STATUS",
    "CREDITDEBIT",
    "CURRENCY",
    "CVCCHECK",
    "DCC_COMMPERCENTAGE",
    "DCC_CONVAMOUNT",
    "DCC_CONVCCY",
    "DCC_EXCHRATE",
    "DCC_EXCHRATESOURCE",
    "DCC_EXCHRATETS",
    "DCC_INDICATOR",
    "DCC_MARGINPERCENTAGE",
    "DCC_VALIDHOURS",
    "DEVICEID",
    "DIGESTCARDNO",
    "ECI",
    "ED",
    "EMAIL",
    "ENCCARDNO",
    "FXAMOUNT",
    "FXCURRENCY",
    "IP",
    "IPCTY",
    "MANDATEID",
    "MOBILEMODE",
    "NBREMAILUSAGE",
    "NBRIPUSAGE",
    "NBRIPUSAGE_ALLTX",
    "NBRUSAGE",
    "NCERROR",
    "ORDERID",
    "PAYID",
    "PAYIDSUB",
    "PAYMENT_REFERENCE",
    "PM",
    "SCO_CATEGORY",
    "SCORING",
    "SEQUENCETYPE",
    "SIGNDATE",
    "STATUS",
    "SUBBRAND",
    "SUBSCRIPTION_ID",
    "TRXDATE",
    "VC",
];

static SHA_OUT_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| SHA_OUT_PARAMETERS.iter().copied().collect());

/// True when `key` (already uppercased) participates in the digest for
/// the given direction.
pub(super) fn retains(filter: ParameterFilter, key: &str) -> bool {
    match filter {
        ParameterFilter::ShaIn => RequestField::from_name(key).is_some(),
        ParameterFilter::ShaOut => SHA_OUT_SET.contains(key),
    }
}
