/// The five standard FX market quotes describing one maturity's smile:
/// ATM volatility plus 25- and 10-delta risk reversals and strangles.
/// All values are decimal volatilities (0.10 = 10%).
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FxSmileQuotes {
    /// At-the-money volatility
    pub atm: f64,
    /// 25-delta risk reversal: vol(25d call) - vol(25d put)
    pub rr_25: f64,
    /// 25-delta strangle (butterfly): mean wing vol over ATM
    pub st_25: f64,
    /// 10-delta risk reversal
    pub rr_10: f64,
    /// 10-delta strangle
    pub st_10: f64,
}

impl FxSmileQuotes {
    /// Quote set with no wings: every smile lookup resolves to `atm`.
    pub fn flat(atm: f64) -> Self {
        Self {
            atm,
            rr_25: 0.0,
            st_25: 0.0,
            rr_10: 0.0,
            st_10: 0.0,
        }
    }

    /// Value of a single quote.
    pub fn get(&self, quote: QuoteKind) -> f64 {
        match quote {
            QuoteKind::Atm => self.atm,
            QuoteKind::Rr25 => self.rr_25,
            QuoteKind::St25 => self.st_25,
            QuoteKind::Rr10 => self.rr_10,
            QuoteKind::St10 => self.st_10,
        }
    }

    /// Copy of the quote set with one quote shifted by `eps`. Used by the
    /// sensitivity engine to build perturbed surfaces.
    pub fn bumped(&self, quote: QuoteKind, eps: f64) -> Self {
        let mut out = *self;
        match quote {
            QuoteKind::Atm => out.atm += eps,
            QuoteKind::Rr25 => out.rr_25 += eps,
            QuoteKind::St25 => out.st_25 += eps,
            QuoteKind::Rr10 => out.rr_10 += eps,
            QuoteKind::St10 => out.st_10 += eps,
        }
        out
    }
}

/// Identifies one of the five smile quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum QuoteKind {
    Atm,
    Rr25,
    St25,
    Rr10,
    St10,
}

impl QuoteKind {
    /// All five quotes in reporting order.
    pub const ALL: [QuoteKind; 5] = [
        QuoteKind::Atm,
        QuoteKind::Rr25,
        QuoteKind::St25,
        QuoteKind::Rr10,
        QuoteKind::St10,
    ];

    /// Short market name of the quote, as used in sensitivity reports.
    pub fn name(self) -> &'static str {
        match self {
            QuoteKind::Atm => "atm",
            QuoteKind::Rr25 => "rr25",
            QuoteKind::St25 => "st25",
            QuoteKind::Rr10 => "rr10",
            QuoteKind::St10 => "st10",
        }
    }
}
