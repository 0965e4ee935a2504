//! Turning-point markers — first/second/third-type buy and sell labels.

use serde::{Deserialize, Serialize};

/// Classification label for a structurally significant reversal.
///
/// Serialized names follow the conventional short forms (`1buy` … `l3sell`),
/// with `l` marking the quasi ("like") variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerLabel {
    #[serde(rename = "1buy")]
    FirstBuy,
    #[serde(rename = "1sell")]
    FirstSell,
    #[serde(rename = "2buy")]
    SecondBuy,
    #[serde(rename = "2sell")]
    SecondSell,
    #[serde(rename = "3buy")]
    ThirdBuy,
    #[serde(rename = "3sell")]
    ThirdSell,
    #[serde(rename = "l2buy")]
    QuasiSecondBuy,
    #[serde(rename = "l2sell")]
    QuasiSecondSell,
    #[serde(rename = "l3buy")]
    QuasiThirdBuy,
    #[serde(rename = "l3sell")]
    QuasiThirdSell,
}

impl MarkerLabel {
    pub fn as_str(self) -> &'static str {
        match self {
            MarkerLabel::FirstBuy => "1buy",
            MarkerLabel::FirstSell => "1sell",
            MarkerLabel::SecondBuy => "2buy",
            MarkerLabel::SecondSell => "2sell",
            MarkerLabel::ThirdBuy => "3buy",
            MarkerLabel::ThirdSell => "3sell",
            MarkerLabel::QuasiSecondBuy => "l2buy",
            MarkerLabel::QuasiSecondSell => "l2sell",
            MarkerLabel::QuasiThirdBuy => "l3buy",
            MarkerLabel::QuasiThirdSell => "l3sell",
        }
    }

    /// True for the buy-side labels (carried by down units).
    pub fn is_buy(self) -> bool {
        matches!(
            self,
            MarkerLabel::FirstBuy
                | MarkerLabel::SecondBuy
                | MarkerLabel::ThirdBuy
                | MarkerLabel::QuasiSecondBuy
                | MarkerLabel::QuasiThirdBuy
        )
    }
}

/// A marker attached to a stroke or segment.
///
/// `pivot` is an index back-reference into the pivot list of the level the
/// marker was derived at, if the rule involved a pivot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurningPointMarker {
    pub label: MarkerLabel,
    pub pivot: Option<usize>,
    pub note: String,
}
