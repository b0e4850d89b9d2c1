//! Benchmarks for syntax highlighting performance
//!
//! Run with: cargo bench --bench syntax

use brewbook::markdown::render_note;
use brewbook::syntax::{RuleSetId, RuleTable};

#[global_allocator]
static ALLOC: divan::AllocProfiler = divan::AllocProfiler::system();

fn main() {
    divan::main();
}

const JAVA_SAMPLE: &str = r#"
import java.util.ArrayList;
import java.util.List;

/*
 * Linked list with a few helpers
 */
public class LinkedList<T> {
    private Node<T> head;
    private int size = 0;

    private static class Node<T> {
        T value;
        Node<T> next;

        Node(T value) {
            this.value = value;
        }
    }

    // Append at the tail
    public void add(T value) {
        Node<T> node = new Node<>(value);
        if (head == null) {
            head = node;
        } else {
            Node<T> current = head;
            while (current.next != null) {
                current = current.next;
            }
            current.next = node;
        }
        size++;
    }

    @Override
    public String toString() {
        List<String> parts = new ArrayList<>();
        for (Node<T> n = head; n != null; n = n.next) {
            parts.add(String.valueOf(n.value));
        }
        return "[" + String.join(", ", parts) + "]";
    }

    public static void main(String[] args) {
        LinkedList<Integer> list = new LinkedList<>();
        for (int i = 0; i < 100; i++) {
            list.add(i * 42);
        }
        System.out.println("List: " + list);
    }
}
"#;

const NOTE_SAMPLE: &str = r#"### Collections

Use `List<String>` for ordered data and `Map<String, Integer>` for lookups.

```java
Map<String, Integer> counts = new HashMap<>();
for (String word : words) {
    counts.merge(word, 1, Integer::sum);
}
```

#### Sets

- `HashSet` is unordered
- `TreeSet` is sorted
"#;

fn sample(lines: usize) -> String {
    JAVA_SAMPLE
        .lines()
        .cycle()
        .take(lines)
        .collect::<Vec<_>>()
        .join("\n")
}

// ============================================================================
// Tokenizing and rendering
// ============================================================================

#[divan::bench(args = [50, 500, 5000])]
fn tokenize_code(bencher: divan::Bencher, lines: usize) {
    let table = RuleTable::for_rule_set(RuleSetId::Code);
    let source = sample(lines);
    bencher.bench(|| table.tokenize(divan::black_box(&source)));
}

#[divan::bench(args = [50, 500, 5000])]
fn highlight_code(bencher: divan::Bencher, lines: usize) {
    let table = RuleTable::for_rule_set(RuleSetId::Code);
    let source = sample(lines);
    bencher.bench(|| table.highlight(divan::black_box(&source)));
}

#[divan::bench]
fn highlight_notes_rules(bencher: divan::Bencher) {
    let table = RuleTable::for_rule_set(RuleSetId::Notes);
    bencher.bench(|| table.highlight(divan::black_box(JAVA_SAMPLE)));
}

#[divan::bench]
fn render_note_markdown(bencher: divan::Bencher) {
    let table = RuleTable::for_rule_set(RuleSetId::Notes);
    bencher.bench(|| render_note(divan::black_box(NOTE_SAMPLE), &table));
}

// ============================================================================
// Table construction
// ============================================================================

#[divan::bench]
fn clone_builtin_table() -> RuleTable {
    RuleTable::for_rule_set(divan::black_box(RuleSetId::Code))
}

#[divan::bench]
fn extend_with_keywords(bencher: divan::Bencher) {
    let table = RuleTable::for_rule_set(RuleSetId::Code);
    let words = vec!["var".to_string(), "record".to_string(), "yield".to_string()];
    bencher.bench(|| table.with_extra_keywords(divan::black_box(&words)));
}
