use crate::operation::UnknownOperationError;
use std::str::FromStr;

/// Declares the closed set of operations, embedding each one's source text
/// from `graphql/operations/<Name>.graphql`.
macro_rules! operation_names {
    ($($variant:ident),+ $(,)?) => {
        /// Every operation the catalog knows about.
        ///
        /// This enum is the single source of truth for which operations exist.
        /// There is no way to register an operation at runtime.
        #[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
        pub enum OperationName {
            $($variant,)+
        }

        impl OperationName {
            /// All operation names, in declaration order.
            pub const ALL: &'static [OperationName] = &[
                $(OperationName::$variant,)+
            ];

            /// The operation name as it appears in the GraphQL document and
            /// in the payload's `operationName`.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(OperationName::$variant => stringify!($variant),)+
                }
            }

            pub(crate) fn builtin_source(&self) -> &'static str {
                match self {
                    $(OperationName::$variant => include_str!(concat!(
                        "../../graphql/operations/",
                        stringify!($variant),
                        ".graphql"
                    )),)+
                }
            }
        }
    };
}

operation_names! {
    CreateRandomMessage,
    CreateAccessTokenWithSignature,
    GetSettlementStats,
    GetOverallStats,
    GetTopAllSales,
    GetTopSales,
    GetExchangeRates,
    GetRecentlyListedAxies,
    GetRecentlyListedErc1155Tokens,
    GetRecentlyListedLands,
    GetRecentlyListedItems,
    GetRecentlyListedBundles,
    GetAccessoriesMarketplace,
    GetRecentlyListedAccessoriesV0,
    GetRecentlyListedAccessories,
    GetAccessoryOrders,
    GetRecentlySoldAxies,
    GetRecentlySoldAccessories,
    GetRecentlySoldErc1155Tokens,
    GetRecentlySoldLands,
    GetRecentlySoldItems,
    GetRecentlySoldBundles,
    GetMinPriceErc1155Tokens,
    GetMinPriceAxie,
    CreateOrder,
    GetPublicProfileWithRoninAddress,
    GetPublicProfileWithAccountID,
    GetPrivateProfile,
    GetActivityLog,
    AddActivity,
    UpdateProfileName,
    UpdatePassword,
    GetOwnerAxieList,
    GetOwnerAxieBreederList,
    GetOwnerAccessoryList,
    GetOwnerAccessoryListV2,
    GetOwnerErc1155TokenList,
    GetOwnerLandList,
    GetOwnerItemList,
    GetOwnerBundleList,
    GetAxieDetail,
    GetAxieBrief,
    GetAxieBreedingBrief,
    GetParentsBrief,
    RenameAxie,
    MorphAxie,
    GetErc1155TokenDetail,
    GetLandDetail,
    GetItemDetail,
    GetItemBrief,
    GetBundleDetail,
    GetAxieTransferHistory,
    GetErc1155TokenOrders,
    GetLandTransferHistory,
    GetItemTransferHistory,
}

impl OperationName {
    /// Position of this name within [`OperationName::ALL`].
    pub(crate) fn index(&self) -> usize {
        *self as usize
    }
}

impl std::fmt::Display for OperationName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OperationName {
    type Err = UnknownOperationError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        OperationName::ALL
            .iter()
            .find(|op_name| op_name.as_str() == name)
            .copied()
            .ok_or_else(|| UnknownOperationError {
                name: name.to_string(),
            })
    }
}
