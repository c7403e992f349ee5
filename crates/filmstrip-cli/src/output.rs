use filmstrip_domain::{ImageCard, LikeList};

pub fn print_cards(cards: &[ImageCard], json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(cards)?);
        return Ok(());
    }

    if cards.is_empty() {
        println!("No images found.");
        return Ok(());
    }
    for card in cards {
        println!("{}\t{}", card.label, card.url);
    }
    Ok(())
}

pub fn print_likes(likes: &LikeList, json: bool) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(likes)?);
        return Ok(());
    }

    if likes.is_empty() {
        println!("Nothing liked yet.");
        return Ok(());
    }
    for entry in likes.entries() {
        println!("{}\t{}", entry.liked_at.format("%Y-%m-%d %H:%M"), entry.url);
    }
    Ok(())
}
