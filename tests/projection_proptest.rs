use proptest::prelude::*;
use prosemap::project;

#[derive(Clone, Debug)]
enum Segment {
    Text(String),
    Tag(String),
}

fn segment_strategy() -> impl Strategy<Value = Segment> {
    prop_oneof![
        "[a-zA-Z0-9éü ,;:'\"-]{1,8}".prop_map(Segment::Text),
        "[a-z]{1,6}( [a-z]{1,4}=\"[a-z0-9]{0,4}\")?".prop_map(Segment::Tag),
    ]
}

fn balanced_markup() -> impl Strategy<Value = (String, String)> {
    prop::collection::vec(segment_strategy(), 0..10).prop_map(|segments| {
        let mut markup = String::new();
        let mut plain = String::new();
        for segment in segments {
            match segment {
                Segment::Text(text) => {
                    markup.push_str(&text);
                    plain.push_str(&text);
                }
                Segment::Tag(tag) => {
                    markup.push('<');
                    markup.push_str(&tag);
                    markup.push('>');
                }
            }
        }
        (markup, plain)
    })
}

/// Tag stripping written independently of the projection under test.
fn strip_tags(markup: &str) -> String {
    let mut out = String::new();
    let mut in_tag = false;
    for ch in markup.chars() {
        if ch == '<' {
            in_tag = true;
        } else if ch == '>' && in_tag {
            in_tag = false;
        } else if !in_tag {
            out.push(ch);
        }
    }
    out
}

fn char_slice(text: &str, start: usize, end: usize) -> String {
    text.chars().skip(start).take(end.saturating_sub(start)).collect()
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn prop_projection_matches_tag_stripping((markup, plain) in balanced_markup()) {
        let projection = project(&markup);
        prop_assert_eq!(&projection.plain_text, &plain);
        prop_assert_eq!(projection.plain_text, strip_tags(&markup));
    }

    #[test]
    fn prop_mapping_round_trips_and_increases((markup, _plain) in balanced_markup()) {
        let projection = project(&markup);
        let text_len = projection.mapping.text_len();

        let mut previous: Option<usize> = None;
        for text_pos in 0..text_len {
            let markup_pos = projection.mapping.map_text_to_markup(text_pos);
            prop_assert_eq!(projection.mapping.map_markup_to_text(markup_pos), text_pos);
            if let Some(prev) = previous {
                prop_assert!(markup_pos > prev);
            }
            previous = Some(markup_pos);
        }
    }

    #[test]
    fn prop_every_substring_survives_round_trip((markup, plain) in balanced_markup()) {
        let projection = project(&markup);
        let text_len = projection.mapping.text_len();

        for start in 0..text_len {
            for end in start..text_len {
                let markup_start = projection.mapping.map_text_to_markup(start);
                let markup_end = projection.mapping.map_text_to_markup(end);
                let markup_span = char_slice(&markup, markup_start, markup_end);
                prop_assert_eq!(strip_tags(&markup_span), char_slice(&plain, start, end));
            }
        }
    }
}
