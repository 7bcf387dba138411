#![no_main]

use libfuzzer_sys::fuzz_target;
use packlist::core::*;

// Byte layout: [width, policy, edited, (from, to)*] with 0 meaning "unset".
fuzz_target!(|data: &[u8]| {
    let [width, policy, edited, rest @ ..] = data else {
        return;
    };
    let policy = if policy % 2 == 0 {
        EditPolicy::FreezePreceding
    } else {
        EditPolicy::ResyncAll
    };
    let config = SequencerConfig::default()
        .with_default_width(u32::from(*width))
        .with_edit_policy(policy);

    let mut rows: Vec<LineItem> = rest
        .chunks_exact(2)
        .map(|pair| {
            let mut row = LineItemBuilder::blank().build();
            row.package_from = (pair[0] != 0).then_some(u32::from(pair[0]));
            row.package_to = (pair[1] != 0).then_some(u32::from(pair[1]) * 3);
            row
        })
        .collect();

    let top = resequence(&mut rows, Some(usize::from(*edited)), &config);
    assert!(validate_rows(&rows).is_empty() || rows.is_empty() || top > MAX_PACKAGE_NUMBER);
    assert_eq!(top, rows.last().and_then(|r| r.package_to).unwrap_or(0));
});
