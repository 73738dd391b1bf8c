//! Plain-text rendering of search results.

use std::collections::HashSet;
use std::io::{self, Write};

use crate::matching::UserComment;
use crate::types::Threshold;

/// Distinct matched usernames in order of first appearance.
#[must_use]
pub fn matched_usernames<'a>(found: &[UserComment<'a>]) -> Vec<&'a str> {
    let mut seen = HashSet::new();
    found
        .iter()
        .map(|item| item.matched_username)
        .filter(|name| seen.insert(*name))
        .collect()
}

fn comment_block(
    out: &mut impl Write,
    number: usize,
    item: &UserComment<'_>,
    note: &str,
) -> io::Result<()> {
    let comment = item.comment;
    writeln!(out, "Comment #{number}:")?;
    writeln!(out, "Author: {}{note}", comment.author)?;
    writeln!(out, "Published: {}", comment.published_at)?;
    writeln!(out, "Likes: {}", comment.like_count)?;
    writeln!(out, "Text: {}\n", comment.text)
}

/// Fuzzy search results: summary, matched names, then each comment.
pub fn fuzzy_results(out: &mut impl Write, found: &[UserComment<'_>]) -> io::Result<()> {
    let usernames = matched_usernames(found);
    writeln!(
        out,
        "\nFound {} comments from {} similar usernames:",
        found.len(),
        usernames.len()
    )?;
    writeln!(out, "Matched usernames: {}\n", usernames.join(", "))?;

    for (index, item) in found.iter().enumerate() {
        comment_block(out, index + 1, item, " (matched to your input)")?;
    }
    Ok(())
}

/// Explain an empty fuzzy search, naming near-miss usernames when there are any.
///
/// When candidates come from the same comments being searched, `similar` is
/// always empty here: every matched author has at least one comment. The
/// near-miss wording only shows for a caller passing names from elsewhere.
pub fn no_fuzzy_results(
    out: &mut impl Write,
    username: &str,
    threshold: Threshold,
    similar: &[&str],
) -> io::Result<()> {
    if similar.is_empty() {
        writeln!(
            out,
            "\nNo comments found and no usernames similar to '{username}' with threshold {threshold}."
        )?;
        writeln!(out, "Try lowering the threshold or check the spelling.")
    } else {
        writeln!(
            out,
            "\nNo comments found, but found these similar usernames: {}",
            similar.join(", ")
        )?;
        writeln!(
            out,
            "Try adjusting the threshold or check if these users commented in this video."
        )
    }
}

/// Exact search results.
pub fn exact_results(
    out: &mut impl Write,
    username: &str,
    found: &[UserComment<'_>],
) -> io::Result<()> {
    if found.is_empty() {
        return writeln!(out, "\nNo comments found by {username} in this video.");
    }

    writeln!(out, "\nFound {} comments by {username}:\n", found.len())?;
    for (index, item) in found.iter().enumerate() {
        comment_block(out, index + 1, item, "")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Comment;

    fn comment(author: &str, text: &str) -> Comment {
        Comment {
            author: author.to_string(),
            text: text.to_string(),
            like_count: 7,
            published_at: "2024-02-02T02:02:02Z".to_string(),
        }
    }

    fn rendered(write: impl FnOnce(&mut Vec<u8>) -> io::Result<()>) -> io::Result<String> {
        let mut out = Vec::new();
        write(&mut out)?;
        Ok(String::from_utf8_lossy(&out).into_owned())
    }

    #[test]
    fn fuzzy_results_list_names_then_comments() -> io::Result<()> {
        let comments = [comment("Kiki", "a"), comment("kiki_", "b"), comment("Kiki", "c")];
        let found: Vec<_> = comments
            .iter()
            .map(|c| UserComment {
                comment: c,
                matched_username: &c.author,
            })
            .collect();

        let text = rendered(|out| fuzzy_results(out, &found))?;
        assert!(text.starts_with("\nFound 3 comments from 2 similar usernames:\n"));
        assert!(text.contains("Matched usernames: Kiki, kiki_\n"));
        assert!(text.contains(
            "Comment #2:\nAuthor: kiki_ (matched to your input)\nPublished: 2024-02-02T02:02:02Z\nLikes: 7\nText: b\n"
        ));
        Ok(())
    }

    #[test]
    fn empty_fuzzy_results_distinguish_near_misses() -> io::Result<()> {
        let text = rendered(|out| no_fuzzy_results(out, "zed", Threshold::new(0.8), &[]))?;
        assert!(text.contains("no usernames similar to 'zed' with threshold 0.8"));

        let text = rendered(|out| {
            no_fuzzy_results(out, "zed", Threshold::new(0.8), &["Zed", "zedd"])
        })?;
        assert!(text.contains("found these similar usernames: Zed, zedd"));
        Ok(())
    }

    #[test]
    fn exact_results_report_absence() -> io::Result<()> {
        let text = rendered(|out| exact_results(out, "nobody", &[]))?;
        assert_eq!(text, "\nNo comments found by nobody in this video.\n");
        Ok(())
    }
}
