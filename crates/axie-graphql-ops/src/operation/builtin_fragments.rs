/// Declares the shipped fragment sources, embedding each one from
/// `graphql/fragments/<Name>.graphql`.
macro_rules! builtin_fragment_sources {
    ($($name:ident),+ $(,)?) => {
        pub(crate) const BUILTIN_FRAGMENT_SOURCES: &[&str] = &[
            $(include_str!(concat!(
                "../../graphql/fragments/",
                stringify!($name),
                ".graphql"
            )),)+
        ];
    };
}

builtin_fragment_sources! {
    SettlementStats,
    AssetInfo,
    OrderInfo,
    OrdersInfo,
    TransferRecordInSettledAuction,
    TransferHistoryInSettledAuction,
    TransferRecords,
    AccountAddresses,
    AccountReferral,
    PublicProfile,
    PrivateProfile,
    BuyAxie,
    ListAxie,
    UnlistAxie,
    GiftAxie,
    MakeAxieOffer,
    CancelAxieOffer,
    SyncExp,
    MorphToPetite,
    MorphToAdult,
    BreedAxies,
    BuyLand,
    ListLand,
    UnlistLand,
    GiftLand,
    MakeLandOffer,
    CancelLandOffer,
    BuyItem,
    ListItem,
    UnlistItem,
    GiftItem,
    MakeItemOffer,
    CancelItemOffer,
    BuyBundle,
    ListBundle,
    UnlistBundle,
    MakeBundleOffer,
    CancelBundleOffer,
    AddLoomBalance,
    WithdrawFromLoom,
    AddFundBalance,
    WithdrawFromFund,
    WithdrawRoninWeth,
    TopupRoninWeth,
    Activity,
    AxieCardAbility,
    AxiePart,
    AxiePartWithAbilities,
    AxieBattleInfo,
    AxieBannedStatus,
    AxieDetail,
    AxieBrief,
    AxieSettledBrief,
    AxieBreedingBrief,
    Equipment,
    OwnedEquipment,
    EquipmentInstance,
    EquipmentSettledBrief,
    EquipmentListingBrief,
    EquipmentDetail,
    Erc1155TokenDetail,
    Erc1155TokenSettledBrief,
    Erc1155TokenTopSaleBrief,
    LandDetail,
    LandSettledBrief,
    LandBundleBrief,
    ItemDetail,
    ItemBrief,
    ItemSettledBrief,
    ItemBundleBrief,
    BundleDetail,
    BundleSettledBrief,
    EquipmentTransferRecords,
}
