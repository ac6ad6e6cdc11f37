//! ISO-4217 currency table used for symbols and minor-unit scales.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Currency {
    pub code: &'static str,
    pub symbol: &'static str,
    /// Decimal places of the minor unit.
    pub scale: u32,
}

impl Currency {
    const fn new(code: &'static str, symbol: &'static str, scale: u32) -> Self {
        Self {
            code,
            symbol,
            scale,
        }
    }

    /// Looks up a currency by its ISO code, ignoring ASCII case.
    pub fn lookup(code: &str) -> Option<&'static Currency> {
        let code = code.trim();
        CURRENCIES
            .binary_search_by(|currency| {
                currency
                    .code
                    .bytes()
                    .map(|b| b.to_ascii_uppercase())
                    .cmp(code.bytes().map(|b| b.to_ascii_uppercase()))
            })
            .ok()
            .map(|idx| &CURRENCIES[idx])
    }
}

pub const DEFAULT_SCALE: u32 = 2;

pub fn currency_symbol(code: &str) -> Option<&'static str> {
    Currency::lookup(code).map(|currency| currency.symbol)
}

pub fn currency_scale(code: &str) -> u32 {
    Currency::lookup(code).map_or(DEFAULT_SCALE, |currency| currency.scale)
}

// Sorted by code.
static CURRENCIES: &[Currency] = &[
    Currency::new("AED", "د.إ", 2),
    Currency::new("AFN", "؋", 2),
    Currency::new("ALL", "L", 2),
    Currency::new("AMD", "֏", 2),
    Currency::new("AOA", "Kz", 2),
    Currency::new("ARS", "$", 2),
    Currency::new("AUD", "$", 2),
    Currency::new("AZN", "₼", 2),
    Currency::new("BAM", "KM", 2),
    Currency::new("BBD", "$", 2),
    Currency::new("BDT", "৳", 2),
    Currency::new("BGN", "лв", 2),
    Currency::new("BHD", "د.ب", 3),
    Currency::new("BIF", "Fr", 0),
    Currency::new("BND", "$", 2),
    Currency::new("BOB", "Bs", 2),
    Currency::new("BRL", "R$", 2),
    Currency::new("BSD", "$", 2),
    Currency::new("BTN", "Nu.", 2),
    Currency::new("BWP", "P", 2),
    Currency::new("BYN", "Br", 2),
    Currency::new("BZD", "$", 2),
    Currency::new("CAD", "$", 2),
    Currency::new("CDF", "₣", 2),
    Currency::new("CHF", "CHF", 2),
    Currency::new("CLP", "$", 0),
    Currency::new("CNY", "¥", 2),
    Currency::new("COP", "$", 2),
    Currency::new("CRC", "₡", 2),
    Currency::new("CUP", "$", 2),
    Currency::new("CVE", "$", 2),
    Currency::new("CZK", "Kč", 2),
    Currency::new("DJF", "Fdj", 0),
    Currency::new("DKK", "kr", 2),
    Currency::new("DOP", "$", 2),
    Currency::new("DZD", "د.ج", 2),
    Currency::new("EGP", "ج.م", 2),
    Currency::new("ERN", "Nfk", 2),
    Currency::new("ETB", "Br", 2),
    Currency::new("EUR", "€", 2),
    Currency::new("FJD", "$", 2),
    Currency::new("GBP", "£", 2),
    Currency::new("GEL", "₾", 2),
    Currency::new("GHS", "₵", 2),
    Currency::new("GMD", "D", 2),
    Currency::new("GNF", "Fr", 0),
    Currency::new("GTQ", "Q", 2),
    Currency::new("GYD", "$", 2),
    Currency::new("HKD", "HK$", 2),
    Currency::new("HNL", "L", 2),
    Currency::new("HTG", "G", 2),
    Currency::new("HUF", "Ft", 2),
    Currency::new("IDR", "Rp", 2),
    Currency::new("ILS", "₪", 2),
    Currency::new("INR", "₹", 2),
    Currency::new("IQD", "ع.د", 3),
    Currency::new("IRR", "﷼", 2),
    Currency::new("ISK", "kr", 0),
    Currency::new("JMD", "J$", 2),
    Currency::new("JOD", "د.ا", 3),
    Currency::new("JPY", "¥", 0),
    Currency::new("KES", "Sh", 2),
    Currency::new("KGS", "с", 2),
    Currency::new("KHR", "៛", 2),
    Currency::new("KMF", "CF", 0),
    Currency::new("KPW", "₩", 0),
    Currency::new("KRW", "₩", 0),
    Currency::new("KWD", "د.ك", 3),
    Currency::new("KYD", "$", 2),
    Currency::new("KZT", "₸", 2),
    Currency::new("LAK", "₭", 2),
    Currency::new("LBP", "ل.ل", 2),
    Currency::new("LKR", "₨", 2),
    Currency::new("LRD", "$", 2),
    Currency::new("LSL", "L", 2),
    Currency::new("LYD", "ل.د", 3),
    Currency::new("MAD", "د.م.", 2),
    Currency::new("MDL", "L", 2),
    Currency::new("MGA", "Ar", 2),
    Currency::new("MKD", "ден", 2),
    Currency::new("MMK", "Ks", 2),
    Currency::new("MNT", "₮", 2),
    Currency::new("MRU", "UM", 2),
    Currency::new("MUR", "₨", 2),
    Currency::new("MVR", "Rf", 2),
    Currency::new("MWK", "MK", 2),
    Currency::new("MXN", "$", 2),
    Currency::new("MYR", "RM", 2),
    Currency::new("MZN", "MT", 2),
    Currency::new("NAD", "$", 2),
    Currency::new("NGN", "₦", 2),
    Currency::new("NIO", "C$", 2),
    Currency::new("NOK", "kr", 2),
    Currency::new("NPR", "₨", 2),
    Currency::new("NZD", "$", 2),
    Currency::new("OMR", "ر.ع", 3),
    Currency::new("PEN", "S/.", 2),
    Currency::new("PGK", "K", 2),
    Currency::new("PHP", "₱", 2),
    Currency::new("PKR", "₨", 2),
    Currency::new("PLN", "zł", 2),
    Currency::new("PYG", "₲", 0),
    Currency::new("QAR", "ر.ق", 2),
    Currency::new("RON", "lei", 2),
    Currency::new("RSD", "дин.", 2),
    Currency::new("RUB", "₽", 2),
    Currency::new("RWF", "Fr", 0),
    Currency::new("SAR", "ر.س", 2),
    Currency::new("SBD", "$", 2),
    Currency::new("SCR", "₨", 2),
    Currency::new("SDG", "£", 2),
    Currency::new("SEK", "kr", 2),
    Currency::new("SGD", "$", 2),
    Currency::new("SLL", "Le", 2),
    Currency::new("SOS", "Sh", 2),
    Currency::new("SRD", "$", 2),
    Currency::new("SSP", "£", 2),
    Currency::new("STN", "Db", 2),
    Currency::new("SYP", "£", 2),
    Currency::new("SZL", "E", 2),
    Currency::new("THB", "฿", 2),
    Currency::new("TJS", "ЅМ", 2),
    Currency::new("TMT", "m", 2),
    Currency::new("TND", "د.ت", 3),
    Currency::new("TOP", "T$", 2),
    Currency::new("TRY", "₺", 2),
    Currency::new("TTD", "$", 2),
    Currency::new("TWD", "NT$", 2),
    Currency::new("TZS", "Sh", 2),
    Currency::new("UAH", "₴", 2),
    Currency::new("UGX", "Sh", 0),
    Currency::new("USD", "$", 2),
    Currency::new("UYU", "$", 2),
    Currency::new("UZS", "сўм", 2),
    Currency::new("VES", "Bs.S", 2),
    Currency::new("VND", "₫", 0),
    Currency::new("VUV", "VT", 0),
    Currency::new("WST", "T", 2),
    Currency::new("XAF", "₣", 0),
    Currency::new("XCD", "$", 2),
    Currency::new("XOF", "₣", 0),
    Currency::new("YER", "﷼", 2),
    Currency::new("ZAR", "R", 2),
    Currency::new("ZMW", "ZK", 2),
    Currency::new("ZWL", "$", 2),
];
