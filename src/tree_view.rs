use super::*;

const RULE_WIDTH: usize = 80;

const SNIPPET_CHARS: usize = 60;

fn header(text: &str, color: bool) -> String {
  let rule = "=".repeat(RULE_WIDTH);

  if color {
    format!("{rule}\n{}\n{rule}\n", text.bold())
  } else {
    format!("{rule}\n{text}\n{rule}\n")
  }
}

/// Human-readable summary of a thread followed by its comment tree.
pub(crate) fn render(thread: &Thread, color: bool) -> String {
  let Thread { comments, post, stats, .. } = thread;

  let mut out = header("POST SUMMARY", color);

  out.push_str(&format!("Title: {}\n", post.title));
  out.push_str(&format!("Author: {}\n", post.author));
  out.push_str(&format!("Subreddit: r/{}\n", post.subreddit));
  out.push_str(&format!("Score: {}\n", post.score));
  out.push_str(&format!(
    "Comments: {} reported, {} extracted ({} top-level, max depth {})\n",
    post.num_comments,
    stats.total_comments,
    stats.top_level_comments,
    stats.max_depth
  ));

  out.push('\n');
  out.push_str(&header("COMMENT TREE", color));

  for (depth, comment) in Comment::walk(comments) {
    let prefix = if depth == 0 {
      "• ".to_string()
    } else {
      format!("{}└─ ", "  ".repeat(depth))
    };

    let author = match &comment.flair {
      Some(flair) => format!("{} [{flair}]", comment.author),
      None => comment.author.clone(),
    };

    let points = format_points(comment.score);

    let snippet = truncate(
      &comment.text.split_whitespace().collect::<Vec<_>>().join(" "),
      SNIPPET_CHARS,
    );

    if color {
      out.push_str(&format!(
        "{prefix}{} ({})  {}\n",
        author.bold(),
        points,
        snippet.dark_grey()
      ));
    } else {
      out.push_str(&format!("{prefix}{author} ({points})  {snippet}\n"));
    }
  }

  out
}
