/*! IPA annotation of text using per-language pronunciation dictionaries.

Text is split into contiguous [`Span`](annotate::Span)s. A span either carries
the transcription found for it in the language's dictionary or is plain text.
Two strategies are used depending on the language:

- languages written without spaces (Chinese, Japanese, Cantonese) are matched
  greedily against the longest dictionary key at each character position,
- every other language is split into word and non-word runs and each word is
  looked up as a whole.

Dictionaries are JSON documents, loaded lazily and cached for the lifetime of
the [`DictionaryStore`](dictionary::DictionaryStore).

# Usage examples

```no_run
use std::sync::Arc;
use ipa_annotate::annotate::Annotator;
use ipa_annotate::dictionary::DictionaryStore;
use ipa_annotate::source::DirectorySource;

let store = Arc::new(DictionaryStore::new(DirectorySource::new("json")));
let annotator = Annotator::new(Arc::clone(&store));

for span in annotator.annotate("en_US", "hello, world!")? {
    println!("{}\t{}", span.text(), span.transcription().unwrap_or(""));
}
# Ok::<(), ipa_annotate::dictionary::DictionaryError>(())
```

The `ipa-annotate` binary in the same repository exposes the same operations
on the command line.
*/

pub mod annotate;
pub mod config;
pub mod dictionary;
pub mod lang;
pub mod source;
pub mod tokenizer;

pub(crate) mod constants;
