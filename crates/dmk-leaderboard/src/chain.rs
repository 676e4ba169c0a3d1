//! # Chain-Derived Score Source
//!
//! Derives remote leaderboard rows from the marketplace contract's read
//! interface: scan datasets `1..next_id`, group active listings by seller,
//! and score 50 points per listing plus 100 points per whole token of
//! listed value. Individual dataset read failures are logged and skipped —
//! one bad row does not take down the feed.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use dmk_core::{Address, TokenAmount};

use crate::error::LeaderboardError;
use crate::merge::LeaderboardRow;
use crate::remote::RemoteScoreSource;

/// A dataset row as read from the marketplace contract.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatasetListing {
    /// The listing seller.
    pub seller: Address,
    /// Content id of the listed dataset.
    pub uri: String,
    /// The listing price.
    pub price: TokenAmount,
    /// Whether the listing is still active.
    pub active: bool,
}

/// The chain read interface the engine consumes. Implementations wrap an
/// RPC client; tests use fixed tables.
pub trait ChainReader: Send + Sync {
    /// One past the highest dataset id (dataset ids start at 1).
    fn next_id(
        &self,
    ) -> impl std::future::Future<Output = Result<u64, LeaderboardError>> + Send;

    /// Read one dataset row by id.
    fn dataset_at(
        &self,
        id: u64,
    ) -> impl std::future::Future<Output = Result<DatasetListing, LeaderboardError>> + Send;
}

/// Points per active listing.
const POINTS_PER_LISTING: u64 = 50;
/// Points per whole token of listed value.
const POINTS_PER_TOKEN: u64 = 100;

/// A [`RemoteScoreSource`] that derives scores from chain listings.
#[derive(Debug)]
pub struct ChainScoreSource<C> {
    reader: C,
}

impl<C: ChainReader> ChainScoreSource<C> {
    /// Wrap a chain reader.
    pub fn new(reader: C) -> Self {
        Self { reader }
    }
}

impl<C: ChainReader> RemoteScoreSource for ChainScoreSource<C> {
    fn source_name(&self) -> &str {
        "chain"
    }

    async fn fetch_scores(&self) -> Result<Vec<LeaderboardRow>, LeaderboardError> {
        let next_id = self.reader.next_id().await?;

        struct SellerStats {
            listings: u64,
            value_milli: u64,
        }
        let mut stats: BTreeMap<Address, SellerStats> = BTreeMap::new();

        for id in 1..next_id {
            let listing = match self.reader.dataset_at(id).await {
                Ok(listing) => listing,
                Err(e) => {
                    tracing::debug!(dataset_id = id, error = %e, "skipping unreadable dataset");
                    continue;
                }
            };
            if !listing.active {
                continue;
            }
            let entry = stats.entry(listing.seller).or_insert(SellerStats {
                listings: 0,
                value_milli: 0,
            });
            entry.listings += 1;
            entry.value_milli += listing.price.as_milli();
        }

        Ok(stats
            .into_iter()
            .map(|(address, s)| LeaderboardRow {
                address,
                points: s.listings * POINTS_PER_LISTING
                    + s.value_milli * POINTS_PER_TOKEN / 1000,
            })
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct FixedChain {
        rows: Vec<DatasetListing>,
        fail_at: Option<u64>,
    }

    impl ChainReader for FixedChain {
        async fn next_id(&self) -> Result<u64, LeaderboardError> {
            Ok(self.rows.len() as u64 + 1)
        }

        async fn dataset_at(&self, id: u64) -> Result<DatasetListing, LeaderboardError> {
            if self.fail_at == Some(id) {
                return Err(LeaderboardError::UpstreamUnavailable {
                    source_name: "chain".into(),
                    reason: format!("dataset {id} unreadable"),
                });
            }
            Ok(self.rows[(id - 1) as usize].clone())
        }
    }

    fn listing(seller: &str, milli: u64, active: bool) -> DatasetListing {
        DatasetListing {
            seller: Address::new(seller).unwrap(),
            uri: "bafy-x".into(),
            price: TokenAmount::from_milli(milli),
            active,
        }
    }

    #[tokio::test]
    async fn scores_aggregate_per_seller() {
        let chain = FixedChain {
            rows: vec![
                listing("0xaaa", 1000, true),
                listing("0xaaa", 500, true),
                listing("0xbbb", 2000, true),
            ],
            fail_at: None,
        };
        let source = ChainScoreSource::new(chain);
        let rows = source.fetch_scores().await.unwrap();

        // 0xaaa: 2 listings (100) + 1.5 tokens (150) = 250.
        // 0xbbb: 1 listing (50) + 2 tokens (200) = 250.
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.points == 250));
    }

    #[tokio::test]
    async fn inactive_listings_are_ignored() {
        let chain = FixedChain {
            rows: vec![listing("0xaaa", 1000, true), listing("0xaaa", 9000, false)],
            fail_at: None,
        };
        let source = ChainScoreSource::new(chain);
        let rows = source.fetch_scores().await.unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].points, 50 + 100);
    }

    #[tokio::test]
    async fn unreadable_dataset_is_skipped_not_fatal() {
        let chain = FixedChain {
            rows: vec![
                listing("0xaaa", 1000, true),
                listing("0xbbb", 1000, true),
                listing("0xccc", 1000, true),
            ],
            fail_at: Some(2),
        };
        let source = ChainScoreSource::new(chain);
        let rows = source.fetch_scores().await.unwrap();
        assert_eq!(rows.len(), 2);
        assert!(rows.iter().all(|r| r.address.as_str() != "0xbbb"));
    }

    #[tokio::test]
    async fn empty_chain_yields_empty_rows() {
        let chain = FixedChain {
            rows: vec![],
            fail_at: None,
        };
        let source = ChainScoreSource::new(chain);
        assert!(source.fetch_scores().await.unwrap().is_empty());
    }
}
