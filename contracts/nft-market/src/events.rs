use super::*;

/// Token listing event data.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct ListingEvent {
    pub item_id: ItemId,
    /// Listed token.
    pub token: Token,
    /// Account that listed the token.
    pub seller: AccountAddress,
    /// Asking price.
    pub price: Amount,
}

/// Token sale event data.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct SaleEvent {
    pub item_id: ItemId,
    /// Sold token.
    pub token: Token,
    /// Previous token owner, paid with the price.
    pub seller: AccountAddress,
    /// New token owner.
    pub buyer: AccountAddress,
    /// Price.
    pub price: Amount,
}

/// Listing fee change event data.
#[derive(Debug, Serialize, SchemaType, PartialEq, Eq)]
pub struct ListingFeeEvent {
    pub previous: Amount,
    pub current: Amount,
}

/// Tagged market event to be serialized for the event log.
#[derive(Debug, PartialEq, Eq)]
pub enum MarketEvent {
    /// Token put up for sale.
    Listing(ListingEvent),
    /// Listed token bought.
    Sale(SaleEvent),
    /// Listing fee updated by an operator.
    ListingFeeUpdated(ListingFeeEvent),
}

impl Serial for MarketEvent {
    fn serial<W: Write>(&self, out: &mut W) -> Result<(), W::Err> {
        match self {
            MarketEvent::Listing(event) => {
                out.write_u8(LISTING_TAG)?;
                event.serial(out)
            }
            MarketEvent::Sale(event) => {
                out.write_u8(SALE_TAG)?;
                event.serial(out)
            }
            MarketEvent::ListingFeeUpdated(event) => {
                out.write_u8(LISTING_FEE_TAG)?;
                event.serial(out)
            }
        }
    }
}

impl Deserial for MarketEvent {
    fn deserial<R: Read>(source: &mut R) -> ParseResult<Self> {
        match source.read_u8()? {
            LISTING_TAG => ListingEvent::deserial(source).map(MarketEvent::Listing),
            SALE_TAG => SaleEvent::deserial(source).map(MarketEvent::Sale),
            LISTING_FEE_TAG => {
                ListingFeeEvent::deserial(source).map(MarketEvent::ListingFeeUpdated)
            }
            _ => Err(ParseError::default()),
        }
    }
}

#[concordium_cfg_test]
mod tests {
    use super::*;

    #[concordium_test]
    fn test_event_tags() {
        let event = MarketEvent::ListingFeeUpdated(ListingFeeEvent {
            previous: Amount::from_micro_ccd(25_000),
            current: Amount::zero(),
        });
        let bytes = to_bytes(&event);

        claim_eq!(bytes[0], LISTING_FEE_TAG);
        claim_eq!(from_bytes::<MarketEvent>(&bytes), Ok(event));
    }

    #[concordium_test]
    fn test_unknown_tag_is_rejected() {
        let result = from_bytes::<MarketEvent>(&[0u8, 1, 2]);
        claim!(result.is_err(), "Tag 0 is not a market event");
    }
}
