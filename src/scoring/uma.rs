use crate::domain::models::Seat;
use crate::errors::ScoreError;

/// Number of players at the table.
pub const SEATS: usize = 4;

/// Computes each seat's uma after splitting ties.
///
/// `ranks` holds one placement per seat in East, South, West, North order;
/// ranks need not be distinct. `uma` is indexed by sorted rank slot (best
/// placement first), NOT by seat. Seats sharing a rank split the uma of the
/// slots their group occupies evenly; the split is real-valued, so fractional
/// uma is expected and no rounding is applied.
///
/// The result is seat-indexed: `result[k]` belongs to the seat that supplied
/// `ranks[k]`. The table total is always preserved.
pub fn adjusted_uma(ranks: [u8; SEATS], uma: [f64; SEATS]) -> Result<[f64; SEATS], ScoreError> {
    validate_ranks(&ranks)?;

    let order = seats_by_rank(&ranks);
    let mut adjusted = [0.0; SEATS];

    let mut i = 0;
    while i < SEATS {
        let j = run_end(&ranks, &order, i);
        let share: f64 = uma[i..j].iter().sum::<f64>() / (j - i) as f64;
        for &seat in &order[i..j] {
            adjusted[seat] = share;
        }
        i = j;
    }

    Ok(adjusted)
}

fn validate_ranks(ranks: &[u8; SEATS]) -> Result<(), ScoreError> {
    for (seat, &rank) in Seat::ALL.iter().zip(ranks) {
        if rank < 1 || rank > SEATS as u8 {
            return Err(ScoreError::InvalidRank { seat: *seat, rank });
        }
    }
    Ok(())
}

/// Seat indices ordered by ascending rank. The sort is stable, so tied seats
/// keep table order within their group.
fn seats_by_rank(ranks: &[u8; SEATS]) -> [usize; SEATS] {
    let mut order = [0, 1, 2, 3];
    order.sort_by_key(|&seat| ranks[seat]);
    order
}

/// End (exclusive) of the run of equal ranks starting at sorted slot `start`.
fn run_end(ranks: &[u8; SEATS], order: &[usize; SEATS], start: usize) -> usize {
    let rank = ranks[order[start]];
    let mut end = start + 1;
    while end < SEATS && ranks[order[end]] == rank {
        end += 1;
    }
    end
}

#[cfg(test)]
mod tests {
    use super::*;

    const TABLE: [f64; SEATS] = [45.0, 5.0, -15.0, -35.0];

    fn all_rank_assignments() -> Vec<[u8; SEATS]> {
        let mut out = Vec::new();
        for a in 1..=4u8 {
            for b in 1..=4u8 {
                for c in 1..=4u8 {
                    for d in 1..=4u8 {
                        out.push([a, b, c, d]);
                    }
                }
            }
        }
        out
    }

    #[test]
    fn distinct_ranks_keep_the_table() {
        assert_eq!(adjusted_uma([1, 2, 3, 4], TABLE).unwrap(), TABLE);
    }

    #[test]
    fn full_tie_splits_four_ways() {
        assert_eq!(adjusted_uma([1, 1, 1, 1], TABLE).unwrap(), [0.0; SEATS]);
    }

    #[test]
    fn tie_for_first_splits_the_top_two_slots() {
        let adjusted = adjusted_uma([1, 1, 3, 4], TABLE).unwrap();
        assert_eq!(adjusted, [25.0, 25.0, -15.0, -35.0]);
    }

    #[test]
    fn tie_for_second_splits_the_middle_slots() {
        let adjusted = adjusted_uma([1, 2, 2, 4], TABLE).unwrap();
        assert_eq!(adjusted, [45.0, -5.0, -5.0, -35.0]);
    }

    #[test]
    fn result_is_seat_indexed() {
        // South took first, east took last.
        let adjusted = adjusted_uma([4, 1, 2, 3], TABLE).unwrap();
        assert_eq!(adjusted, [-35.0, 45.0, 5.0, -15.0]);
    }

    #[test]
    fn tied_seats_get_the_same_share_wherever_they_sit() {
        // West and north share second place.
        let adjusted = adjusted_uma([1, 4, 2, 2], TABLE).unwrap();
        assert_eq!(adjusted, [45.0, -35.0, -5.0, -5.0]);
    }

    #[test]
    fn odd_sums_split_fractionally() {
        let adjusted = adjusted_uma([1, 2, 2, 4], [45.0, 6.0, -15.0, -35.0]).unwrap();
        assert_eq!(adjusted, [45.0, -4.5, -4.5, -35.0]);
    }

    #[test]
    fn every_permutation_of_distinct_ranks_maps_slots_to_seats() {
        for ranks in all_rank_assignments() {
            let mut sorted = ranks;
            sorted.sort();
            if sorted != [1, 2, 3, 4] {
                continue;
            }
            let adjusted = adjusted_uma(ranks, TABLE).unwrap();
            for seat in 0..SEATS {
                assert_eq!(adjusted[seat], TABLE[(ranks[seat] - 1) as usize], "{ranks:?}");
            }
        }
    }

    #[test]
    fn split_preserves_the_table_total() {
        let tables = [TABLE, [20.0, 10.0, -10.0, -20.0], [45.0, 6.0, -15.0, -35.0]];
        for ranks in all_rank_assignments() {
            for table in tables {
                let adjusted = adjusted_uma(ranks, table).unwrap();
                let total: f64 = adjusted.iter().sum();
                let expected: f64 = table.iter().sum();
                assert!(
                    (total - expected).abs() < 1e-9,
                    "ranks {ranks:?} table {table:?}"
                );
            }
        }
    }

    #[test]
    fn out_of_range_ranks_are_rejected() {
        assert_eq!(
            adjusted_uma([0, 1, 2, 3], TABLE),
            Err(ScoreError::InvalidRank {
                seat: Seat::East,
                rank: 0
            })
        );
        assert_eq!(
            adjusted_uma([1, 2, 3, 5], TABLE),
            Err(ScoreError::InvalidRank {
                seat: Seat::North,
                rank: 5
            })
        );
    }
}
