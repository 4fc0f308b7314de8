//! Terminal rendering of transcript messages.

use chrono::Local;
use cryochat_config::DisplayConfig;
use cryochat_core::Message;

/// Print a bot reply with its citations, follow-ups and time.
pub fn print_reply(reply: &Message, display: &DisplayConfig) {
    println!();
    for line in reply.text.lines() {
        println!("  Assistant > {line}");
    }

    if display.show_citations {
        if let Some(citations) = &reply.citations {
            println!();
            for citation in citations {
                println!(
                    "  📖 {} ({}, p.{})",
                    citation.text, citation.section, citation.page
                );
            }
        }
    }

    if display.show_follow_ups {
        if let Some(questions) = &reply.related_questions {
            println!();
            println!("  Suggested follow-ups:");
            for (i, question) in questions.iter().enumerate() {
                println!("    /{} {question}", i + 1);
            }
        }
    }

    if display.show_timestamps {
        println!("  {}", reply.timestamp.with_timezone(&Local).format("%H:%M"));
    }
    println!();
}
