//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use brewbook::syntax::{Category, RuleTable};
use tempfile::TempDir;

pub const HELLO_WORLD: &str = r#"// Simple Hello World program in Java
public class HelloWorld {
    public static void main(String[] args) {
        System.out.println("Hello, World!");
    }
}
"#;

pub const ARRAY_PROGRAMS: &str = r#"// Array operations: declaration, iteration and sums
public class ArrayPrograms {
    public static void main(String[] args) {
        int[] numbers = {5, 10, 15};
        int sum = 0;
        for (int n : numbers) {
            sum += n;
        }
        System.out.println("Sum: " + sum);
    }
}
"#;

pub const INHERITANCE: &str = r#"// Inheritance with a base Animal class
class Animal {
    @Override
    public String toString() {
        return "Animal";
    }
}
"#;

pub const NOTE: &str = r#"---
title: Generics
category: advanced
updated: 2024-02-29
---
### Generic types

Use `List<String>` to hold names:

```java
List<String> names = new ArrayList<>();
```
"#;

/// Write `files` (relative path, contents) under `root`
pub fn write_files(root: &Path, files: &[(&str, &str)]) {
    for (relative, contents) in files {
        let path = root.join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(path, contents).unwrap();
    }
}

/// Temporary project with a programs and a notes directory
pub struct Project {
    pub dir: TempDir,
}

impl Project {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().unwrap();
        write_files(
            dir.path(),
            &[
                ("programs/HelloWorld.java", HELLO_WORLD),
                ("programs/ArrayPrograms.java", ARRAY_PROGRAMS),
                ("programs/OOP/Inheritance.java", INHERITANCE),
                ("notes/generics.md", NOTE),
            ],
        );
        Self { dir }
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn path(&self, relative: &str) -> PathBuf {
        self.dir.path().join(relative)
    }
}

/// Highlighted spans as (text, category) pairs
pub fn spans(table: &RuleTable, source: &str) -> Vec<(String, Category)> {
    table
        .tokenize(source)
        .iter()
        .map(|t| (t.text(source).to_string(), t.category))
        .collect()
}

/// Remove every tag, leaving escaped text
pub fn strip_tags(html: &str) -> String {
    let mut out = String::with_capacity(html.len());
    let mut in_tag = false;
    for ch in html.chars() {
        match ch {
            '<' => in_tag = true,
            '>' if in_tag => in_tag = false,
            _ if !in_tag => out.push(ch),
            _ => {}
        }
    }
    out
}
