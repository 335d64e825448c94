use soroban_sdk::{Env, String};

use crate::errors::CrowdfundError;
use crate::storage_types::SECONDS_PER_DAY;

/// Convert days to seconds
pub fn days_to_seconds(days: u32) -> u64 {
    days as u64 * SECONDS_PER_DAY
}

/// Check if timestamp is strictly in the past
pub fn is_past(env: &Env, timestamp: u64) -> bool {
    env.ledger().timestamp() > timestamp
}

/// Split a donation into the part credited toward the goal and the surplus.
///
/// `remaining` is what the campaign still needs and must be positive.
pub fn split_donation(remaining: i128, amount: i128) -> (i128, i128) {
    if amount >= remaining {
        (remaining, amount - remaining)
    } else {
        (amount, 0)
    }
}

/// True when `text` is empty or holds nothing but whitespace.
///
/// Reads the text in fixed-size chunks and decodes one UTF-8 character at
/// a time, so text of any length is checked. Invalid UTF-8 counts as content.
fn is_blank(text: &String) -> bool {
    let bytes = text.to_bytes();
    let len = bytes.len();
    let mut chunk = [0u8; 64];
    let mut ch = [0u8; 4];
    let mut filled = 0;
    let mut start = 0;

    while start < len {
        let end = core::cmp::min(start + chunk.len() as u32, len);
        let part = &mut chunk[..(end - start) as usize];
        bytes.slice(start..end).copy_into_slice(part);

        for &byte in part.iter() {
            ch[filled] = byte;
            filled += 1;
            match core::str::from_utf8(&ch[..filled]) {
                Ok(decoded) => {
                    if !decoded.chars().all(char::is_whitespace) {
                        return false;
                    }
                    filled = 0;
                }
                // Incomplete multi-byte sequence, keep reading
                Err(e) if e.error_len().is_none() && filled < ch.len() => {}
                Err(_) => return false,
            }
        }
        start = end;
    }

    filled == 0
}

pub fn validate_title(title: &String) -> Result<(), CrowdfundError> {
    if is_blank(title) {
        return Err(CrowdfundError::InvalidTitle);
    }
    Ok(())
}

pub fn validate_description(description: &String) -> Result<(), CrowdfundError> {
    if is_blank(description) {
        return Err(CrowdfundError::InvalidDescription);
    }
    Ok(())
}

pub fn validate_goal(goal: i128) -> Result<(), CrowdfundError> {
    if goal <= 0 {
        return Err(CrowdfundError::InvalidGoal);
    }
    Ok(())
}

pub fn validate_amount(amount: i128) -> Result<(), CrowdfundError> {
    if amount <= 0 {
        return Err(CrowdfundError::InvalidAmount);
    }
    Ok(())
}
