//! Element and modality balance over the ten main bodies.
//!
//! Dominant and lacking buckets are the *first* bucket, in declaration
//! order, reaching the maximum or minimum count.

use crate::bodies::CelestialBody;
use crate::western::signs::{Element, Modality, Sign};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::HashMap;

/// A classification of signs into a fixed, ordered set of buckets
pub trait Bucket: Copy + Eq + Serialize + 'static {
    /// Declaration order, used as the tie-break order
    const ORDER: &'static [Self];

    fn of(sign: Sign) -> Self;

    fn id(self) -> &'static str;
}

impl Bucket for Element {
    const ORDER: &'static [Self] = &[Element::Fire, Element::Earth, Element::Air, Element::Water];

    fn of(sign: Sign) -> Self {
        sign.element()
    }

    fn id(self) -> &'static str {
        Element::id(self)
    }
}

impl Bucket for Modality {
    const ORDER: &'static [Self] = &[Modality::Cardinal, Modality::Fixed, Modality::Mutable];

    fn of(sign: Sign) -> Self {
        sign.modality()
    }

    fn id(self) -> &'static str {
        Modality::id(self)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceTally<K: Bucket> {
    /// Counts in declaration order
    #[serde(
        serialize_with = "serialize_counts",
        deserialize_with = "deserialize_counts"
    )]
    pub counts: Vec<(K, u32)>,
    pub dominant: K,
    pub dominant_count: u32,
    pub lacking: K,
    pub lacking_count: u32,
}

fn serialize_counts<K: Bucket, S: Serializer>(
    counts: &[(K, u32)],
    serializer: S,
) -> Result<S::Ok, S::Error> {
    serializer.collect_map(counts.iter().map(|(bucket, count)| (bucket.id(), count)))
}

fn deserialize_counts<'de, K: Bucket, D: Deserializer<'de>>(
    deserializer: D,
) -> Result<Vec<(K, u32)>, D::Error> {
    let raw: HashMap<String, u32> = HashMap::deserialize(deserializer)?;
    Ok(K::ORDER
        .iter()
        .map(|&k| (k, raw.get(k.id()).copied().unwrap_or(0)))
        .collect())
}

impl<K: Bucket> BalanceTally<K> {
    pub fn count(&self, bucket: K) -> u32 {
        self.counts
            .iter()
            .find(|(k, _)| *k == bucket)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().map(|(_, c)| c).sum()
    }
}

/// Tally the main bodies among `bodies` into `K` buckets.
pub fn tally<K: Bucket>(bodies: &[CelestialBody]) -> BalanceTally<K> {
    let mut counts: Vec<(K, u32)> = K::ORDER.iter().map(|&k| (k, 0)).collect();

    for body in bodies.iter().filter(|b| b.body.is_main()) {
        let bucket = K::of(body.placement.sign);
        if let Some(slot) = counts.iter_mut().find(|(k, _)| *k == bucket) {
            slot.1 += 1;
        }
    }

    // ORDER is never empty
    let first = counts[0];
    let (dominant, dominant_count) = counts
        .iter()
        .copied()
        .fold(first, |best, cur| if cur.1 > best.1 { cur } else { best });
    let (lacking, lacking_count) = counts
        .iter()
        .copied()
        .fold(first, |best, cur| if cur.1 < best.1 { cur } else { best });

    BalanceTally {
        counts,
        dominant,
        dominant_count,
        lacking,
        lacking_count,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BalanceAnalysis {
    pub elements: BalanceTally<Element>,
    pub modalities: BalanceTally<Modality>,
}

pub fn analyze(bodies: &[CelestialBody]) -> BalanceAnalysis {
    BalanceAnalysis {
        elements: tally(bodies),
        modalities: tally(bodies),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{Body, MAIN};
    use crate::ephemeris::types::PlanetPosition;
    use crate::western::signs::ELEMENTS;

    fn body_at(body: Body, lon: f64) -> CelestialBody {
        CelestialBody::from_position(
            body,
            &PlanetPosition {
                lon,
                lat: 0.0,
                speed_lon: 1.0,
            },
        )
    }

    #[test]
    fn test_bucket_order_matches_tables() {
        let table_order: Vec<Element> = ELEMENTS.iter().map(|(e, _)| *e).collect();
        assert_eq!(Element::ORDER, table_order.as_slice());
    }

    #[test]
    fn test_counts_sum_to_ten_and_ignore_extra_bodies() {
        let mut bodies: Vec<CelestialBody> = MAIN
            .iter()
            .enumerate()
            .map(|(i, &b)| body_at(b, i as f64 * 37.0))
            .collect();
        bodies.push(body_at(Body::Chiron, 0.0));
        bodies.push(body_at(Body::NorthNode, 0.0));
        bodies.push(CelestialBody::south_node_from(&body_at(Body::NorthNode, 0.0)));

        let analysis = analyze(&bodies);
        assert_eq!(analysis.elements.total(), 10);
        assert_eq!(analysis.modalities.total(), 10);
    }

    #[test]
    fn test_ties_break_by_declaration_order() {
        // Two fire (Aries), two water (Cancer), everything else absent.
        let bodies = vec![
            body_at(Body::Sun, 5.0),
            body_at(Body::Moon, 95.0),
            body_at(Body::Mercury, 10.0),
            body_at(Body::Venus, 100.0),
        ];
        let elements: BalanceTally<Element> = tally(&bodies);
        assert_eq!(elements.dominant, Element::Fire);
        assert_eq!(elements.dominant_count, 2);
        assert_eq!(elements.lacking, Element::Earth);
        assert_eq!(elements.lacking_count, 0);

        // Aries and Cancer are both cardinal.
        let modalities: BalanceTally<Modality> = tally(&bodies);
        assert_eq!(modalities.dominant, Modality::Cardinal);
        assert_eq!(modalities.dominant_count, 4);
        assert_eq!(modalities.lacking, Modality::Fixed);
    }

    #[test]
    fn test_counts_serialize_as_ordered_object() {
        let bodies = vec![body_at(Body::Sun, 295.0)];
        let elements: BalanceTally<Element> = tally(&bodies);
        let json = serde_json::to_string(&elements).unwrap();
        assert!(json.starts_with(r#"{"counts":{"fire":0,"earth":1,"air":0,"water":0}"#));
        assert!(json.contains(r#""dominant":"earth""#));

        let back: BalanceTally<Element> = serde_json::from_str(&json).unwrap();
        assert_eq!(back, elements);
    }
}
