/// 거래 관련 커맨드 처리
/// 1. 경매 생성
/// 2. 구매(낙찰)
// region:    --- Imports
use crate::auction::model::Settlement;
use crate::error::AuctionError;
use crate::ledger::LedgerManager;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

// endregion: --- Imports

// region:    --- Commands
/// 경매 생성 명령
/// duration_secs == 0 이면 원장의 기본 기간을 사용한다.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct CreateAuctionCommand {
    pub seller: String,
    pub starting_price: u64,
    pub discount_rate: u64,
    pub item: String,
    #[serde(default)]
    pub duration_secs: u64,
}

/// 구매 명령
/// amount는 제시 금액이며 현재 가격 초과분은 환불된다.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct BuyCommand {
    pub index: u64,
    pub buyer: String,
    pub amount: u64,
}

/// 1. 경매 생성
pub async fn handle_create_auction(
    cmd: CreateAuctionCommand,
    ledger: &LedgerManager,
) -> Result<u64, AuctionError> {
    info!("{:<12} --> 경매 생성 요청 처리 시작: {:?}", "Command", cmd);

    let index = ledger
        .create_auction(
            &cmd.seller,
            cmd.starting_price,
            cmd.discount_rate,
            &cmd.item,
            cmd.duration_secs,
        )
        .await?;

    info!(
        "{:<12} --> 경매 생성 완료: index={}",
        "Command", index
    );
    Ok(index)
}

/// 2. 구매(낙찰)
pub async fn handle_buy(cmd: BuyCommand, ledger: &LedgerManager) -> Result<Settlement, AuctionError> {
    info!("{:<12} --> 구매 요청 처리 시작: {:?}", "Command", cmd);

    match ledger.buy(cmd.index, cmd.amount, &cmd.buyer).await {
        Ok(settlement) => {
            info!(
                "{:<12} --> 구매 완료: index={} final_price={} winner={}",
                "Command", settlement.index, settlement.final_price, settlement.winner
            );
            Ok(settlement)
        }
        Err(e) => {
            warn!(
                "{:<12} --> 구매 거부: index={} code={}",
                "Command",
                cmd.index,
                e.code()
            );
            Err(e)
        }
    }
}

// endregion: --- Commands
