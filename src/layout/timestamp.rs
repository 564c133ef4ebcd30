// Copyright 2024 FastLabs Developers
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use jiff::Timestamp;
use jiff::tz::TimeZone;

/// Render an instant as `YYYY-MM-DD HH:MM:SS.mmm UTC`.
///
/// Always expressed in UTC, with milliseconds zero-padded to exactly three
/// digits and an explicit zone suffix.
pub(crate) fn format_timestamp(ts: Timestamp) -> String {
    let time = ts.to_zoned(TimeZone::UTC);
    time.strftime("%Y-%m-%d %H:%M:%S.%3f %Z").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_layout() {
        let ts: Timestamp = "2025-03-09T04:05:06.007Z".parse().unwrap();
        assert_eq!(format_timestamp(ts), "2025-03-09 04:05:06.007 UTC");
    }

    #[test]
    fn test_millis_zero_padded() {
        let ts: Timestamp = "2025-12-31T23:59:59Z".parse().unwrap();
        assert_eq!(format_timestamp(ts), "2025-12-31 23:59:59.000 UTC");
    }

    #[test]
    fn test_renders_in_utc() {
        let ts: Timestamp = "2025-06-30T23:30:00-04:00".parse().unwrap();
        assert_eq!(format_timestamp(ts), "2025-07-01 03:30:00.000 UTC");
    }
}
