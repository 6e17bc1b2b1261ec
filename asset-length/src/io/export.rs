use itertools::Itertools;

use crate::entities::{AssetGeometry, Length};
use crate::io::ext_repr::{ExtAssetLength, ExtLength, ExtLengthReport};

pub fn export_length(length: &Length) -> ExtLength {
    ExtLength {
        value: length.value,
        unit: length.unit,
    }
}

/// Bundles the lengths of a batch of assets (with their ids) into a report.
pub fn export_report<'a>(
    measured: impl IntoIterator<Item = (&'a str, &'a AssetGeometry, Length)>,
) -> ExtLengthReport {
    let lengths = measured
        .into_iter()
        .map(|(id, asset, length)| ExtAssetLength {
            id: id.to_string(),
            kind: asset.kind(),
            length: export_length(&length),
        })
        .collect_vec();

    let total = lengths
        .iter()
        .map(|l| Length::meters(l.length.value))
        .sum::<Length>();

    ExtLengthReport {
        lengths,
        total: export_length(&total),
    }
}
