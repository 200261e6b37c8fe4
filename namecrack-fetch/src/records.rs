use std::collections::HashMap;

use crate::error::Error;

/// One line of an SSA `yobYYYY.txt` file: `Name,Gender,Count`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NameRecord {
    pub name: String,
    pub gender: char,
    pub count: u64,
}

/// Parse a single `Name,Gender,Count` line
pub fn parse_line(line: &str) -> Option<NameRecord> {
    let mut fields = line.trim().split(',');
    let name = fields.next().filter(|n| !n.is_empty())?;
    let gender = fields.next()?;
    let count = fields.next()?.parse().ok()?;
    if fields.next().is_some() {
        return None;
    }

    let mut gender_chars = gender.chars();
    let gender = match (gender_chars.next(), gender_chars.next()) {
        (Some(g), None) => g,
        _ => return None,
    };

    Some(NameRecord { name: name.to_string(), gender, count })
}

/// Parse every record in a year file. Blank lines are skipped; any other line
/// that doesn't parse fails the whole file.
pub fn parse_records(text: &str) -> Result<Vec<NameRecord>, Error> {
    let mut records = Vec::with_capacity(text.len() / 16);
    for (i, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let record = parse_line(line)
            .ok_or_else(|| Error::MalformedRecord { line: i + 1, content: line.to_string() })?;
        records.push(record);
    }
    Ok(records)
}

/// Rank names by descending total count.
///
/// The same name under both genders (compared case-insensitively) is merged
/// into one entry with the counts summed, keeping the first spelling seen.
/// Equal totals keep file order.
pub fn rank(records: Vec<NameRecord>) -> Vec<String> {
    let mut totals: Vec<(String, u64)> = Vec::with_capacity(records.len());
    let mut index: HashMap<String, usize> = HashMap::with_capacity(records.len());

    for record in records {
        let key = record.name.to_lowercase();
        match index.get(&key) {
            Some(&i) => totals[i].1 += record.count,
            None => {
                index.insert(key, totals.len());
                totals.push((record.name, record.count));
            }
        }
    }

    // Stable sort, so ties stay in first-appearance order.
    totals.sort_by(|a, b| b.1.cmp(&a.1));
    totals.into_iter().map(|(name, _)| name).collect()
}
